use super::surface::Surface;
use crate::config::RenderStyle;
use crate::linkage::Chain;
use crate::math::Rect;

/// Clears `region`, then strokes every joint (and, if enabled, each link).
pub fn draw_chain<S: Surface + ?Sized>(surface: &mut S, chain: &Chain, style: &RenderStyle, region: Rect) {
    surface.clear(region, style.background);

    if style.draw_links {
        for pair in chain.joints().windows(2) {
            surface.draw_line(pair[0].position, pair[1].position, style.link_color);
        }
    }

    for joint in chain.joints() {
        surface.draw_circle(joint.position, joint.radius, style.joint_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;
    use glam::Vec2;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear(Rect, Color),
        Circle(Vec2, f32, Color),
        Line(Vec2, Vec2, Color),
    }

    #[derive(Default)]
    struct Recorder(Vec<Call>);

    impl Surface for Recorder {
        fn clear(&mut self, region: Rect, color: Color) {
            self.0.push(Call::Clear(region, color));
        }
        fn draw_circle(&mut self, center: Vec2, radius: f32, stroke: Color) {
            self.0.push(Call::Circle(center, radius, stroke));
        }
        fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: Color) {
            self.0.push(Call::Line(from, to, stroke));
        }
    }

    fn chain() -> Chain {
        Chain::from_triples(&[(0.0, 0.0, 10.0), (5.0, 0.0, 9.0), (10.0, 0.0, 8.0)]).unwrap()
    }

    #[test]
    fn clears_then_draws_each_joint_once() {
        let region = Rect::from_size(Vec2::new(100.0, 50.0));
        let mut recorder = Recorder::default();
        draw_chain(&mut recorder, &chain(), &RenderStyle::default(), region);

        assert_eq!(
            recorder.0,
            vec![
                Call::Clear(region, Color::BLACK),
                Call::Circle(Vec2::new(0.0, 0.0), 10.0, Color::RED),
                Call::Circle(Vec2::new(5.0, 0.0), 9.0, Color::RED),
                Call::Circle(Vec2::new(10.0, 0.0), 8.0, Color::RED),
            ]
        );
    }

    #[test]
    fn links_are_drawn_when_enabled() {
        let region = Rect::from_size(Vec2::new(100.0, 50.0));
        let mut recorder = Recorder::default();
        let style = RenderStyle::default().with_links(true);
        draw_chain(&mut recorder, &chain(), &style, region);

        let lines = recorder
            .0
            .iter()
            .filter(|c| matches!(c, Call::Line(..)))
            .count();
        assert_eq!(lines, 2);
    }
}
