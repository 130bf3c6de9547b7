use glam::{Mat4, Vec2};
use glium::{
    glutin::surface::WindowSurface, implement_vertex, uniform, Blend, Display, DrawParameters,
    Program, Surface,
};
use log::trace;

use super::{glyphs, shapes};
use crate::{
    canvas::{Canvas, Color},
    error::BubbleError,
};

static VERTEX_SHADER_SRC: &str = r#"
#version 150

in vec2 position;
in vec4 color;
out vec4 vertex_color;

uniform mat4 projection;

void main() {
    vertex_color = color;
    gl_Position = projection * vec4(position, 0.0, 1.0);
}
"#;

static FRAGMENT_SHADER_SRC: &str = r#"
#version 140

in vec4 vertex_color;
out vec4 color;

void main() {
    color = vec4(vertex_color);
}
"#;

const BACKGROUND: (f32, f32, f32, f32) = (0.098, 0.098, 0.098, 1.0);

/// Rough advance of one glyph relative to the font size.
const GLYPH_ADVANCE: f32 = 0.55;
const STROKE_WIDTH: f32 = 0.1;

#[derive(Copy, Clone, Debug)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

implement_vertex!(Vertex, position, color);

/// A label line laid out by the simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub center: Vec2,
    pub font_size: f32,
}

/// Canvas that collects one frame of geometry for the GPU.
///
/// Shapes are kept in call order so later bubbles paint over earlier ones.
/// Text is drawn as strokes of the segment font in [`glyphs`]; every line is
/// also kept in `labels`.
pub struct SceneBatch {
    viewport: Vec2,
    vertices: Vec<Vertex>,
    labels: Vec<Label>,
}

impl SceneBatch {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            vertices: vec![],
            labels: vec![],
        }
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Maps logical pixels (origin top left, y down) to clip space.
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(0.0, self.viewport.x, self.viewport.y, 0.0, -1.0, 1.0)
    }
}

impl Canvas for SceneBatch {
    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.labels.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices.append(&mut shapes::circle(
            center,
            color,
            radius,
            shapes::resolution(radius),
        ));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Color) {
        self.vertices.append(&mut shapes::ring(
            center,
            color,
            radius,
            line_width,
            shapes::resolution(radius),
        ));
    }

    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * GLYPH_ADVANCE
    }

    fn fill_text(&mut self, text: &str, center: Vec2, font_size: f32, color: Color) {
        let width = (font_size * STROKE_WIDTH).max(1.0);
        for (from, to) in glyphs::layout(text, center, font_size, font_size * GLYPH_ADVANCE) {
            self.vertices.append(&mut shapes::line(from, to, color, width));
        }
        self.labels.push(Label {
            text: text.to_string(),
            center,
            font_size,
        });
    }
}

pub fn build_program(display: &Display<WindowSurface>) -> Result<Program, BubbleError> {
    Program::from_source(display, VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC, None)
        .map_err(|e| BubbleError::Window(e.to_string()))
}

/// Uploads the batch and presents it.
pub fn present(
    batch: &SceneBatch,
    display: &Display<WindowSurface>,
    program: &Program,
) -> Result<(), BubbleError> {
    let mut target = display.draw();
    target.clear_color(BACKGROUND.0, BACKGROUND.1, BACKGROUND.2, BACKGROUND.3);

    let uniforms = uniform! {
        projection: batch.projection().to_cols_array_2d(),
    };
    let params = DrawParameters {
        blend: Blend::alpha_blending(),
        ..Default::default()
    };

    let result = glium::VertexBuffer::new(display, batch.vertices())
        .map_err(|e| BubbleError::Window(e.to_string()))
        .and_then(|vertex_buffer| {
            let indices = glium::index::NoIndices(glium::index::PrimitiveType::TrianglesList);
            target
                .draw(&vertex_buffer, indices, program, &uniforms, &params)
                .map_err(|e| BubbleError::Window(e.to_string()))
        });
    trace!(
        "presented {} vertices, {} labels",
        batch.vertices().len(),
        batch.labels().len()
    );

    // the frame has to be finished even if drawing failed
    target
        .finish()
        .map_err(|e| BubbleError::Window(e.to_string()))?;
    result
}
