pub mod scroll_and_redraw;
