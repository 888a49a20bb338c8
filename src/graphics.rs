use foragers::simulation::ecosystem::Ecosystem;
use foragers::simulation::locatable::Locatable;
use foragers::simulation::params::Params;
use geo::{Point, Rect};
use macroquad::prelude::*;

const FOOD_COLOR: Color = Color::new(90.0 / 255.0, 200.0 / 255.0, 150.0 / 255.0, 1.0);

trait ToScreen {
    type Output;
    fn to_screen(&self, params: &Params) -> Self::Output;
}

fn screen_scale(params: &Params) -> (f32, f32) {
    (
        screen_width() / params.arena.width,
        screen_height() / params.arena.height,
    )
}

impl ToScreen for Point<f32> {
    type Output = Vec2;
    fn to_screen(&self, params: &Params) -> Vec2 {
        let (scale_x, scale_y) = screen_scale(params);
        vec2(self.x() * scale_x, self.y() * scale_y)
    }
}

impl ToScreen for Rect<f32> {
    type Output = macroquad::math::Rect;
    fn to_screen(&self, params: &Params) -> macroquad::math::Rect {
        let (scale_x, scale_y) = screen_scale(params);
        macroquad::math::Rect::new(
            self.min().x * scale_x,
            self.min().y * scale_y,
            self.width() * scale_x,
            self.height() * scale_y,
        )
    }
}

pub fn draw_food(ecosystem: &Ecosystem) {
    let params = ecosystem.params();
    ecosystem.food().iter().for_each(|item| {
        let rect = item.hitbox().to_screen(params);
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, FOOD_COLOR);
    });
}

pub fn draw_organisms(ecosystem: &Ecosystem) {
    let params = ecosystem.params();
    ecosystem.organisms().iter().for_each(|entity| {
        let rect = entity.hitbox().to_screen(params);
        let [r, g, b] = entity.traits.color;
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, Color::from_rgba(r, g, b, 255));

        // generation label
        let font_size = 16.0;
        let center = entity.pos.to_screen(params);
        let text = entity.traits.generation.to_string();
        let text_size = measure_text(&text, None, font_size as u16, 1.0);
        draw_text(
            &text,
            center.x - text_size.width / 2.0,
            center.y + text_size.height / 2.0,
            font_size,
            WHITE,
        );
    });
}

pub fn draw_hud(ecosystem: &Ecosystem, ticks_per_frame: u32, paused: bool) {
    let lines = [
        format!("# Organisms: {}", ecosystem.organisms().len()),
        format!("# Food: {}", ecosystem.food().len()),
        format!("Tick: {}", ecosystem.tick_count()),
        format!("Ticks/frame: {ticks_per_frame}{}", if paused { " (paused)" } else { "" }),
        "'p' pause, 'r' restart, arrows change speed".to_string(),
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 10.0, 20.0 + i as f32 * 20.0, 20.0, WHITE);
    }
}
