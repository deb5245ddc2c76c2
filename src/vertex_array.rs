//! Vertex array object owning one static vertex buffer and an optional element buffer.

use std::sync::Arc;

use glow::HasContext;

use crate::vertex_layout::VertexLayout;
use crate::{Error, Result};

struct ElementBufferObject {
    ebo: glow::Buffer,
    elem_size: usize,
}

pub struct VertexArray {
    gl: Arc<glow::Context>,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<ElementBufferObject>,
    pub mode: u32,
    num_vtx: usize,
}

fn create_buffer(gl: &glow::Context) -> Result<glow::Buffer> {
    unsafe { gl.create_buffer() }.map_err(|reason| Error::GlObject {
        what: "buffer",
        reason,
    })
}

impl VertexArray {
    /// Uploads `vtx2data` once with `STATIC_DRAW` and declares `layout` on a new
    /// vertex array. `layout` must describe how `vtx2data` is interleaved.
    pub fn new(
        gl: &Arc<glow::Context>,
        mode: u32,
        vtx2data: &[f32],
        layout: &VertexLayout,
    ) -> Result<Self> {
        let vao = unsafe { gl.create_vertex_array() }.map_err(|reason| Error::GlObject {
            what: "vertex array",
            reason,
        })?;
        let vbo = match create_buffer(gl) {
            Ok(vbo) => vbo,
            Err(e) => {
                unsafe { gl.delete_vertex_array(vao) };
                return Err(e);
            }
        };
        unsafe {
            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vtx2data),
                glow::STATIC_DRAW,
            );
            layout.apply(gl);
            // the attribute pointers keep the buffer, so ARRAY_BUFFER can be unbound
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);
        }
        let num_vtx = layout.num_vertex(vtx2data);
        log::debug!("uploaded {num_vtx} vertices to {vao:?}");
        Ok(VertexArray {
            gl: gl.clone(),
            vao,
            vbo,
            ebo: None,
            mode,
            num_vtx,
        })
    }

    /// Attaches an index buffer; subsequent [`VertexArray::draw`] calls are indexed.
    pub fn set_elem2vtx<T>(&mut self, elem2vtx: &[T]) -> Result<()>
    where
        T: 'static + Copy + num_traits::AsPrimitive<u32>,
    {
        let gl = &self.gl;
        let ebo0 = create_buffer(gl)?;
        let elem2vtx0: Vec<u32> = elem2vtx.iter().map(|i| (*i).as_()).collect();
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo0));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(&elem2vtx0),
                glow::STATIC_DRAW,
            );
            gl.bind_vertex_array(None);
        }
        let old = self.ebo.replace(ElementBufferObject {
            ebo: ebo0,
            elem_size: elem2vtx0.len(),
        });
        if let Some(old) = old {
            unsafe { self.gl.delete_buffer(old.ebo) };
        }
        Ok(())
    }

    pub fn num_vtx(&self) -> usize {
        self.num_vtx
    }

    pub fn draw(&self) {
        let gl = &self.gl;
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            match &self.ebo {
                Some(ebo) => {
                    gl.draw_elements(self.mode, ebo.elem_size as i32, glow::UNSIGNED_INT, 0)
                }
                None => gl.draw_arrays(self.mode, 0, self.num_vtx as i32),
            }
        }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        let gl = &self.gl;
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
            if let Some(ebo) = &self.ebo {
                gl.delete_buffer(ebo.ebo);
            }
        }
    }
}
