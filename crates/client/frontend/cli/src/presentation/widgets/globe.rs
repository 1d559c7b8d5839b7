//! Globe panel: a world map centred on the animated orientation.
//!
//! The terminal has no sphere projection, so the "globe" is an
//! equirectangular window whose centre follows the animator and whose span
//! shrinks with zoom.

use client_frontend_core::QuizViewModel;
use quiz_core::{Coordinate, QuizMode};
use ratatui::{
    Frame,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Line as CanvasLine, Map, MapResolution, Points},
    },
};

use crate::presentation::theme::RatatuiTheme;

/// Half-width of the crosshair, in degrees at zoom 1.
const CROSSHAIR_DEGREES: f64 = 4.0;

pub fn render(frame: &mut Frame, area: Rect, model: &QuizViewModel, theme: &RatatuiTheme) {
    let center = model.orientation();
    let zoom = model.zoom().max(f64::EPSILON);
    let (x_bounds, y_bounds) = bounds(center, zoom);

    // Random mode marks the country in question but never names it.
    let highlight = match model.mode() {
        QuizMode::Random => model.snapshot().target.as_ref().map(|target| target.coordinate),
        QuizMode::Exhaustive => None,
    };
    let found = found_points(model);

    let title = if model.is_settled() {
        format!(" Globe {center} x{zoom:.1} ")
    } else {
        format!(" Globe {center} x{zoom:.1} (turning) ")
    };

    let coastline = theme.coastline();
    let marker = theme.highlight();
    let found_color = theme.found();
    let arm = CROSSHAIR_DEGREES / zoom;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(title),
        )
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: coastline,
                resolution: MapResolution::High,
            });
            ctx.layer();

            ctx.draw(&CanvasLine::new(
                center.longitude - arm,
                center.latitude,
                center.longitude + arm,
                center.latitude,
                Color::DarkGray,
            ));
            ctx.draw(&CanvasLine::new(
                center.longitude,
                center.latitude - arm,
                center.longitude,
                center.latitude + arm,
                Color::DarkGray,
            ));

            if !found.is_empty() {
                ctx.draw(&Points {
                    coords: &found,
                    color: found_color,
                });
            }

            if let Some(coordinate) = highlight {
                ctx.draw(&Points {
                    coords: &[(coordinate.longitude, coordinate.latitude)],
                    color: marker,
                });
            }
        });

    frame.render_widget(canvas, area);
}

/// Canvas points (longitude, latitude) of the countries already found.
pub fn found_points(model: &QuizViewModel) -> Vec<(f64, f64)> {
    model
        .found()
        .map(|target| (target.coordinate.longitude, target.coordinate.latitude))
        .collect()
}

/// Visible longitude and latitude ranges around `center`.
pub fn bounds(center: Coordinate, zoom: f64) -> ([f64; 2], [f64; 2]) {
    let half_width = 180.0 / zoom;
    let half_height = 90.0 / zoom;
    (
        [center.longitude - half_width, center.longitude + half_width],
        [center.latitude - half_height, center.latitude + half_height],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::{ArcTable, Atlas, CountryRegion, QuizConfig, QuizSession, ShapeKind};
    use ratatui::{Terminal, backend::TestBackend};

    fn random_session() -> QuizSession {
        let atlas = Atlas::new(
            vec![
                CountryRegion::new("Zimbabwe", ShapeKind::Polygon, vec![vec![0]]),
                CountryRegion::new("Zambia", ShapeKind::Polygon, vec![vec![1]]),
                CountryRegion::new("Uruguay", ShapeKind::Polygon, vec![vec![2]]),
            ],
            ArcTable::new(vec![
                vec![[30.0, -19.0]],
                vec![[27.0, -13.0]],
                vec![[-56.0, -33.0]],
            ]),
        );
        let mut session = QuizSession::new(QuizMode::Random, &atlas, &QuizConfig::default(), 5);
        session.start().unwrap();
        session
    }

    fn rendered(model: &QuizViewModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), model, &RatatuiTheme::new()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn random_globe_never_names_the_answer() {
        let model = QuizViewModel::new(random_session().snapshot());
        let answer = model.highlighted().expect("round dealt").to_owned();

        let screen = rendered(&model);
        assert!(screen.contains("Globe"));
        assert!(!screen.contains(&answer), "globe names {answer}");
    }

    #[test]
    fn found_points_skip_the_country_on_offer() {
        let mut session = random_session();
        assert!(found_points(&QuizViewModel::new(session.snapshot())).is_empty());

        let first = session.snapshot().target.expect("round dealt");
        session.choose_option(&first.name).unwrap();

        let model = QuizViewModel::new(session.snapshot());
        let expected = (first.coordinate.longitude, first.coordinate.latitude);
        assert_eq!(found_points(&model), vec![expected]);
        assert!(!rendered(&model).contains(model.highlighted().expect("next round")));
    }
}
