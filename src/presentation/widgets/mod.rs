//! Reusable widgets.

mod button;
mod input;

pub use button::{BUTTON_HEIGHT, BasicButton, ButtonOptions, ButtonType};
pub use input::{INPUT_FIELD_HEIGHT, InputField, InputOptions, InputType, REQUIRED_NOTICE};

#[cfg(test)]
pub(crate) fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect()
        })
        .collect()
}
