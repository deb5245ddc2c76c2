//! Interleaved `f32` vertex layouts: attribute slot -> (components, stride, offset).

use glow::HasContext as _;

const F32_SIZE: usize = std::mem::size_of::<f32>();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// `layout (location = index)` in the vertex stage
    pub index: u32,
    pub num_component: usize,
    /// in bytes
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    /// bytes between two consecutive vertices
    pub stride: usize,
    pub attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    /// Attributes packed one after another in each vertex, assigned to slots `0, 1, 2, ...`.
    ///
    /// `interleaved(&[3, 3])` is position + color: stride 24, offsets 0 and 12.
    pub fn interleaved(num_components: &[usize]) -> Self {
        let mut offset = 0;
        let attributes = num_components
            .iter()
            .enumerate()
            .map(|(i, &num_component)| {
                let attr = VertexAttribute {
                    index: i as u32,
                    num_component,
                    offset,
                };
                offset += num_component * F32_SIZE;
                attr
            })
            .collect();
        VertexLayout {
            stride: offset,
            attributes,
        }
    }

    /// A single position attribute in slot 0.
    pub fn positions(ndim: usize) -> Self {
        Self::interleaved(&[ndim])
    }

    /// number of `f32` per vertex
    pub fn num_float_per_vertex(&self) -> usize {
        self.stride / F32_SIZE
    }

    pub fn num_vertex(&self, data: &[f32]) -> usize {
        match self.num_float_per_vertex() {
            0 => 0,
            n => data.len() / n,
        }
    }

    /// Reads the `i_attr`-th attribute of vertex `i_vtx` out of `data`, using the
    /// same stride/offset arithmetic the GPU applies to the uploaded buffer.
    /// `None` when the attribute does not exist or `data` is too short.
    pub fn attribute<'a>(
        &self,
        data: &'a [f32],
        i_vtx: usize,
        i_attr: usize,
    ) -> Option<&'a [f32]> {
        let attr = self.attributes.get(i_attr)?;
        let start = (i_vtx * self.stride + attr.offset) / F32_SIZE;
        data.get(start..start + attr.num_component)
    }

    /// Position of vertex `i_vtx`; `None` unless slot 0 holds exactly three components.
    pub fn xyz(&self, data: &[f32], i_vtx: usize) -> Option<[f32; 3]> {
        if self.attributes.first()?.num_component != 3 {
            return None;
        }
        let xyz = self.attribute(data, i_vtx, 0)?;
        Some(*arrayref::array_ref![xyz, 0, 3])
    }

    /// Declares the layout for the currently bound vertex array and `ARRAY_BUFFER`.
    pub fn apply(&self, gl: &glow::Context) {
        unsafe {
            for attr in &self.attributes {
                gl.vertex_attrib_pointer_f32(
                    attr.index,
                    attr.num_component as i32,
                    glow::FLOAT,
                    false,
                    self.stride as i32,
                    attr.offset as i32,
                );
                gl.enable_vertex_attrib_array(attr.index);
            }
        }
    }
}
