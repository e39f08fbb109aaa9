use super::*;

/// Decides whether a single content item should be hidden.
///
/// Assumes a fresh item; the processed-marker skip happens in the filter
/// pass before classification is reached.
pub(crate) struct Classifier<'a> {
  keywords: &'a KeywordSet,
  locators: &'a Locators,
}

impl<'a> Classifier<'a> {
  pub(crate) fn new(keywords: &'a KeywordSet, locators: &'a Locators) -> Self {
    Self { keywords, locators }
  }

  /// Returns true if any headline, or failing that any description,
  /// within the item matches the keyword set.
  pub(crate) fn classify(&self, item: &Selection) -> bool {
    if self.any_match(item, &self.locators.headline) {
      return true;
    }

    match &self.locators.description {
      Some(description) => self.any_match(item, description),
      None => false,
    }
  }

  fn any_match(&self, item: &Selection, locator: &Matcher) -> bool {
    item.select_matcher(locator).iter().any(|node| {
      let text = node.text();
      let text = text.trim();

      !text.is_empty() && self.keywords.is_match(text)
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fixture(
    html: &str,
    descriptor: &Descriptor,
    keywords: &[&str],
  ) -> (Document, KeywordSet, Locators) {
    let keywords: Vec<String> =
      keywords.iter().map(ToString::to_string).collect();

    (
      Document::from(html),
      KeywordSet::new(&keywords).unwrap(),
      Locators::compile(descriptor).unwrap(),
    )
  }

  fn descriptor() -> Descriptor {
    Descriptor::new(".story", "h2").with_description("p")
  }

  #[test]
  fn hides_on_headline_match() {
    let (document, keywords, locators) = fixture(
      r#"<div class="story"><h2>Mazón dimite</h2></div>"#,
      &descriptor(),
      &["Mazón"],
    );

    let classifier = Classifier::new(&keywords, &locators);
    let item = document.select(".story");

    assert!(classifier.classify(&item));
  }

  #[test]
  fn hides_on_description_match() {
    let (document, keywords, locators) = fixture(
      r#"<div class="story"><h2>Otra noticia</h2><p>Habla Mazón</p></div>"#,
      &descriptor(),
      &["Mazón"],
    );

    let classifier = Classifier::new(&keywords, &locators);
    let item = document.select(".story");

    assert!(classifier.classify(&item));
  }

  #[test]
  fn keeps_items_without_a_match() {
    let (document, keywords, locators) = fixture(
      r#"<div class="story"><h2>Otra noticia</h2><p>Sin relación</p></div>"#,
      &descriptor(),
      &["Mazón"],
    );

    let classifier = Classifier::new(&keywords, &locators);
    let item = document.select(".story");

    assert!(!classifier.classify(&item));
  }

  #[test]
  fn ignores_descriptions_when_no_locator_is_configured() {
    let (document, keywords, locators) = fixture(
      r#"<div class="story"><h2>Otra noticia</h2><p>Habla Mazón</p></div>"#,
      &Descriptor::new(".story", "h2"),
      &["Mazón"],
    );

    let classifier = Classifier::new(&keywords, &locators);
    let item = document.select(".story");

    assert!(!classifier.classify(&item));
  }

  #[test]
  fn skips_empty_text_nodes() {
    let (document, keywords, locators) = fixture(
      r#"<div class="story"><h2></h2><h2>  </h2><p>Habla Mazón</p></div>"#,
      &descriptor(),
      &["Mazón"],
    );

    let classifier = Classifier::new(&keywords, &locators);
    let item = document.select(".story");

    assert!(classifier.classify(&item));
  }

  #[test]
  fn missing_locator_targets_are_not_a_fault() {
    let (document, keywords, locators) = fixture(
      r#"<div class="story">plain text, no headline markup</div>"#,
      &descriptor(),
      &["Mazón"],
    );

    let classifier = Classifier::new(&keywords, &locators);
    let item = document.select(".story");

    assert!(!classifier.classify(&item));
  }
}
