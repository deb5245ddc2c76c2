//! Vertex data and colors used by the tutorial programs.

pub const ORANGE: [f32; 4] = [1.0, 0.5, 0.2, 1.0];
pub const OLIVE: [f32; 4] = [0.5, 0.5, 0.2, 1.0];

/// xyz per vertex: left, right, top
pub const FIRST_TRIANGLE: [f32; 9] = [
    -0.95, -0.5, 0.0, //
    0.0, -0.5, 0.0, //
    -0.45, 0.5, 0.0,
];

pub const SECOND_TRIANGLE: [f32; 9] = [
    0.0, -0.5, 0.0, //
    0.95, -0.5, 0.0, //
    0.45, 0.5, 0.0,
];

/// xyz + rgb per vertex: bottom right, bottom left, top
pub const TRIANGLE_VTX2XYZRGB: [f32; 18] = [
    0.5, -0.5, 0.0, 1.0, 0.0, 0.0, //
    -0.5, -0.5, 0.0, 0.0, 1.0, 0.0, //
    0.0, 0.5, 0.0, 0.0, 0.0, 1.0,
];

/// xyz + rgb + uv per vertex: top right, bottom right, bottom left, top left
pub const QUAD_VTX2XYZRGBUV: [f32; 32] = [
    0.5, 0.5, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, //
    0.5, -0.5, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, //
    -0.5, -0.5, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
    -0.5, 0.5, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0,
];

/// two triangles sharing the diagonal between vertex 1 and vertex 3
pub const QUAD_TRI2VTX: [u32; 6] = [0, 1, 3, 1, 2, 3];
