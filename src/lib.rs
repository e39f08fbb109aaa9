use {
  dom_query::{Document, Matcher, Selection},
  log::{debug, info},
  regex::Regex,
  serde::Deserialize,
  std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::{Rc, Weak},
    sync::LazyLock,
    thread,
    time::Duration,
  },
};

pub use crate::{
  config::{Descriptor, FilterConfig, SiteTable},
  error::Error,
  filter::{MARKER_ATTRIBUTE, NoiseFilter},
  matcher::KeywordSet,
  muffle::{Muffle, Session},
  normalizer::normalize,
  options::{FilterOptions, FilterOptionsBuilder},
  watcher::{MutationBus, Subscription, watch},
};

use crate::{classifier::Classifier, filter::Locators};

mod classifier;
mod config;
mod error;
mod filter;
mod matcher;
mod muffle;
mod normalizer;
mod options;
mod re;
mod watcher;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
