use super::*;

#[derive(Debug, Clone)]
pub struct FilterOptions {
  /// Wait after attach before the first pass, letting initial
  /// asynchronous content render.
  pub startup_delay: Duration,
  /// Inline style applied to hidden items.
  pub hidden_style: String,
}

impl Default for FilterOptions {
  fn default() -> Self {
    Self {
      startup_delay: Duration::from_secs(1),
      hidden_style: filter::HIDDEN_STYLE.to_string(),
    }
  }
}

impl FilterOptions {
  #[must_use]
  pub fn builder() -> FilterOptionsBuilder {
    FilterOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct FilterOptionsBuilder {
  inner: FilterOptions,
}

impl FilterOptionsBuilder {
  #[must_use]
  pub fn build(self) -> FilterOptions {
    self.inner
  }

  #[must_use]
  pub fn hidden_style(self, hidden_style: impl Into<String>) -> Self {
    Self {
      inner: FilterOptions {
        hidden_style: hidden_style.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn startup_delay(self, startup_delay: Duration) -> Self {
    Self {
      inner: FilterOptions {
        startup_delay,
        ..self.inner
      },
    }
  }
}
