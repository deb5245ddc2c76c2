use learn_glow::shapes;
use learn_glow::vertex_layout::VertexLayout;

#[test]
fn position_color_layout_reads_back_the_input() {
    let layout = VertexLayout::interleaved(&[3, 3]);
    assert_eq!(layout.stride, 6 * std::mem::size_of::<f32>());
    assert_eq!(layout.attributes[0].offset, 0);
    assert_eq!(layout.attributes[1].offset, 3 * std::mem::size_of::<f32>());

    let vtx2xyzrgb = shapes::TRIANGLE_VTX2XYZRGB;
    assert_eq!(layout.num_vertex(&vtx2xyzrgb), 3);
    let mut rebuilt = Vec::new();
    for i_vtx in 0..layout.num_vertex(&vtx2xyzrgb) {
        for i_attr in 0..layout.attributes.len() {
            rebuilt.extend_from_slice(layout.attribute(&vtx2xyzrgb, i_vtx, i_attr).unwrap());
        }
    }
    assert_eq!(rebuilt, vtx2xyzrgb.to_vec());
}

#[test]
fn position_color_uv_layout_matches_quad() {
    let layout = VertexLayout::interleaved(&[3, 3, 2]);
    let vtx2data = shapes::QUAD_VTX2XYZRGBUV;
    assert_eq!(layout.num_vertex(&vtx2data), 4);
    // bottom left corner
    assert_eq!(layout.xyz(&vtx2data, 2), Some([-0.5, -0.5, 0.0]));
    assert_eq!(layout.attribute(&vtx2data, 2, 1), Some(&[0.0, 0.0, 1.0][..]));
    assert_eq!(layout.attribute(&vtx2data, 2, 2), Some(&[0.0, 0.0][..]));
    // top right corner has uv (1, 1)
    assert_eq!(layout.attribute(&vtx2data, 0, 2), Some(&[1.0, 1.0][..]));
}
