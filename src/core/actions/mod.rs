pub mod render_line;
pub mod scroll_and_redraw;
