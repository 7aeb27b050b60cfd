// Display side of the calculator

use embedded_graphics::Drawable;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, Point};
use embedded_graphics::text::{Baseline, Text};

use crate::calculator::DisplayText;

/// Anything that can show the calculator's display line
pub trait View {
    fn set_display(&mut self, text: &str);
}

impl<V: View + ?Sized> View for &mut V {
    fn set_display(&mut self, text: &str) {
        (**self).set_display(text);
    }
}

/// Where the display line is drawn
pub const TEXT_ORIGIN: Point = Point::new(5, 38);

/// Renders the display line onto a monochrome draw target
pub struct TextView<D> {
    target: D,
    style: MonoTextStyle<'static, BinaryColor>,
    text: DisplayText,
}

impl<D> TextView<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: D) -> Self {
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(BinaryColor::On)
            .build();

        Self {
            target,
            style,
            text: DisplayText::new(),
        }
    }

    /// Last text rendered
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }

    fn render(&mut self) -> Result<(), D::Error> {
        self.target.clear(BinaryColor::Off)?;

        Text::with_baseline(
            self.text.as_str(),
            TEXT_ORIGIN,
            self.style,
            Baseline::Middle,
        )
        .draw(&mut self.target)?;

        Ok(())
    }
}

impl<D> View for TextView<D>
where
    D: DrawTarget<Color = BinaryColor>,
    D::Error: core::fmt::Debug,
{
    fn set_display(&mut self, text: &str) {
        log::trace!("Rendering: {text}");

        self.text.clear();
        if self.text.push_str(text).is_err() {
            log::warn!("Display text too long: {text}");
        }

        if let Err(e) = self.render() {
            log::error!("Display error: {e:?}");
        }
    }
}
