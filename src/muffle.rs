use super::*;

/// Startup sequencing: resolves the site, runs the first pass after the
/// configured delay, and keeps filtering as the tree mutates.
pub struct Muffle {
  config: FilterConfig,
  options: FilterOptions,
}

impl Muffle {
  #[must_use]
  pub fn new(config: FilterConfig, options: FilterOptions) -> Self {
    Self { config, options }
  }

  /// Attaches filtering to a document. Returns `Ok(None)` when filtering
  /// stays inactive: an empty keyword list or an unrecognized domain.
  /// The returned session keeps re-filtering on every batch `bus`
  /// delivers, for as long as the session lives.
  pub fn attach(
    &self,
    document: Rc<Document>,
    hostname: &str,
    bus: &Rc<MutationBus>,
  ) -> Result<Option<Session>> {
    if self.config.keywords.is_empty() {
      info!("no keywords configured, filtering disabled");
      return Ok(None);
    }

    let Some(descriptor) = self.config.sites.resolve(hostname) else {
      return Ok(None);
    };

    info!(
      "initializing for {hostname} with {} keywords",
      self.config.keywords.len()
    );

    let filter = Rc::new(
      NoiseFilter::new(descriptor, &self.config.keywords)?
        .with_hidden_style(self.options.hidden_style.clone()),
    );

    if !self.options.startup_delay.is_zero() {
      thread::sleep(self.options.startup_delay);
    }

    let initial_hidden = filter.run(&document);

    info!("hid {initial_hidden} items on initial pass");

    let subscription = {
      let document = Rc::clone(&document);
      let filter = Rc::clone(&filter);

      watch(bus, move || {
        filter.run(&document);
      })
    };

    info!("watching for new content");

    Ok(Some(Session {
      document,
      filter,
      subscription,
      initial_hidden,
    }))
  }
}

/// A live filtering session over one document.
pub struct Session {
  document: Rc<Document>,
  filter: Rc<NoiseFilter>,
  subscription: Subscription,
  initial_hidden: usize,
}

impl Session {
  /// Items hidden by the first pass.
  #[must_use]
  pub fn initial_hidden(&self) -> usize {
    self.initial_hidden
  }

  /// Runs one extra pass on demand. Mutation-triggered passes make this
  /// unnecessary in normal operation.
  pub fn run_pass(&self) -> usize {
    self.filter.run(&self.document)
  }

  /// Stops mutation-triggered filtering and releases the document.
  pub fn detach(self) -> Rc<Document> {
    self.subscription.cancel();
    self.document
  }
}
