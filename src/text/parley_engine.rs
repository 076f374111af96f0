use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::Path;

use crate::foundation::core::Size;
use crate::foundation::error::{LintError, LintResult};
use crate::text::measure::{ApproxMeasurer, TextExtent, TextMeasurer};
use crate::text::metrics::FontMetrics;

/// Brush type for measurement-only layouts; color is irrelevant here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct MeasureBrush;

struct ParleyState {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<MeasureBrush>,
}

/// Shaped text measurement through Parley using registered font files.
///
/// Line breaking comes from the shaped layout; line count times the node's own line height gives
/// the wrapped height, so vertical rhythm stays consistent with the node metrics. Fonts that were
/// never registered are measured with [`ApproxMeasurer`].
pub struct ParleyMeasurer {
    state: RefCell<ParleyState>,
    // Font identifier -> family name resolved from the registered bytes.
    families: BTreeMap<String, String>,
    fallback: ApproxMeasurer,
}

impl Default for ParleyMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ParleyMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyMeasurer")
            .field("families", &self.families)
            .finish_non_exhaustive()
    }
}

impl ParleyMeasurer {
    /// Construct with fresh Parley contexts and no registered fonts.
    pub fn new() -> Self {
        Self {
            state: RefCell::new(ParleyState {
                font_ctx: parley::FontContext::default(),
                layout_ctx: parley::LayoutContext::new(),
            }),
            families: BTreeMap::new(),
            fallback: ApproxMeasurer,
        }
    }

    /// Register font bytes under the identifier nodes use in `FontMetrics::family`.
    ///
    /// Returns the family name Parley resolved from the bytes.
    pub fn register_font(
        &mut self,
        identifier: impl Into<String>,
        font_bytes: &[u8],
    ) -> LintResult<String> {
        let identifier = identifier.into();
        let state = self.state.get_mut();
        let families = state
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            LintError::validation(format!(
                "no font families registered from font bytes for '{identifier}'"
            ))
        })?;
        let family_name = state
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| LintError::validation("registered font family has no name"))?
            .to_string();

        tracing::debug!(%identifier, family = %family_name, "registered font");
        self.families.insert(identifier, family_name.clone());
        Ok(family_name)
    }

    /// Read a font file and register it (see [`Self::register_font`]).
    pub fn register_font_file(
        &mut self,
        identifier: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> LintResult<String> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            LintError::validation(format!("read font file '{}': {e}", path.display()))
        })?;
        self.register_font(identifier, &bytes)
    }

    /// Whether `identifier` has registered font bytes.
    pub fn has_font(&self, identifier: &str) -> bool {
        self.families.contains_key(identifier)
    }

    fn shaped(&self, family: &str, text: &str, font: &FontMetrics, max_width: f64) -> TextExtent {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;

        let mut builder = state
            .layout_ctx
            .ranged_builder(&mut state.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family.to_owned())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(
            font.point_size as f32,
        ));

        let mut layout: parley::Layout<MeasureBrush> = builder.build(text);
        layout.break_all_lines(Some(max_width.max(0.0) as f32));

        let lines = layout.len();
        TextExtent {
            size: Size::new(f64::from(layout.width()), lines as f64 * font.line_height),
            lines,
        }
    }
}

impl TextMeasurer for ParleyMeasurer {
    fn measure(&self, text: &str, font: &FontMetrics, max_width: f64) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }
        if !font.point_size.is_finite() || font.point_size <= 0.0 {
            tracing::warn!(
                family = %font.family,
                size = font.point_size,
                "invalid point size, using approximate metrics"
            );
            return self.fallback.measure(text, font, max_width);
        }
        match self.families.get(&font.family) {
            Some(family) => self.shaped(family, text, font, max_width),
            None => self.fallback.measure(text, font, max_width),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/parley_engine.rs"]
mod tests;
