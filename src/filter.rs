use super::*;

/// Attribute marking an item as processed. Left on the live tree so page
/// inspection tools can see what was filtered.
pub const MARKER_ATTRIBUTE: &str = "data-muffle-filtered";

pub(crate) const HIDDEN_STYLE: &str = "display: none";

/// A descriptor's selectors, parsed once so passes never fail.
pub(crate) struct Locators {
  pub(crate) item: Matcher,
  pub(crate) headline: Matcher,
  pub(crate) description: Option<Matcher>,
}

impl Locators {
  pub(crate) fn compile(descriptor: &Descriptor) -> Result<Self> {
    Ok(Self {
      item: compile(&descriptor.item)?,
      headline: compile(&descriptor.headline)?,
      description: descriptor
        .description
        .as_deref()
        .map(compile)
        .transpose()?,
    })
  }
}

fn compile(selector: &str) -> Result<Matcher> {
  Matcher::new(selector)
    .map_err(|_| Error::InvalidSelector(selector.to_string()))
}

/// Runs filter passes over a document: classifies every unprocessed item
/// and hides the ones that match.
pub struct NoiseFilter {
  keywords: KeywordSet,
  locators: Locators,
  hidden_style: String,
}

impl NoiseFilter {
  pub fn new(descriptor: &Descriptor, keywords: &[String]) -> Result<Self> {
    Ok(Self {
      keywords: KeywordSet::new(keywords)?,
      locators: Locators::compile(descriptor)?,
      hidden_style: HIDDEN_STYLE.to_string(),
    })
  }

  #[must_use]
  pub fn with_hidden_style(mut self, style: impl Into<String>) -> Self {
    self.hidden_style = style.into();
    self
  }

  /// One pass over the whole document, in document order. Items already
  /// carrying the processed marker are skipped, so hidden items are never
  /// re-evaluated or re-shown. Returns the number newly hidden.
  pub fn run(&self, document: &Document) -> usize {
    let classifier = Classifier::new(&self.keywords, &self.locators);

    let mut hidden = 0;

    for item in document.select_matcher(&self.locators.item).iter() {
      if item.attr(MARKER_ATTRIBUTE).is_some() {
        continue;
      }

      if classifier.classify(&item) {
        self.hide(&item);
        hidden += 1;
      }
    }

    debug!("filter pass hid {hidden} items");

    hidden
  }

  // Suppression and marker land together, before the next item is examined.
  // Existing inline styles survive; only the suppression is appended.
  fn hide(&self, item: &Selection) {
    let style = match item.attr("style") {
      Some(existing) if !existing.trim().is_empty() => {
        format!(
          "{}; {}",
          existing.trim_end().trim_end_matches(';'),
          self.hidden_style
        )
      }
      _ => self.hidden_style.clone(),
    };

    item.set_attr("style", &style);
    item.set_attr(MARKER_ATTRIBUTE, "true");
  }
}
