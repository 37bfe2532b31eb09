/// Start/restart click target, centred on the playfield.

use crate::geometry::Rect;
use crate::settings::Settings;

const BUTTON_WIDTH: f32 = 20.0;
const BUTTON_HEIGHT: f32 = 3.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub msg: String,
}

impl Button {
    pub fn new(settings: &Settings, msg: &str) -> Self {
        // Never wider than the screen; small terminals still get a target.
        let width = BUTTON_WIDTH.min(settings.screen_width);
        let height = BUTTON_HEIGHT.min(settings.screen_height);
        let x = ((settings.screen_width - width) / 2.0).floor();
        let y = ((settings.screen_height - height) / 2.0).floor();
        Button {
            rect: Rect::new(x, y, width, height),
            msg: msg.to_string(),
        }
    }

    pub fn is_clicked(&self, x: f32, y: f32) -> bool {
        self.rect.contains_point(x, y)
    }
}
