use super::*;

type Reaction = Box<dyn FnMut()>;

/// Fan-out point for subtree mutation notifications.
///
/// The hosting environment calls [`MutationBus::notify`] once per batch of
/// tree changes; every live subscriber's reaction runs synchronously, so
/// reactions never overlap. What changed is irrelevant to subscribers:
/// they re-scan globally and rely on the processed-marker skip to stay
/// cheap in steady state.
pub struct MutationBus {
  next_id: Cell<u64>,
  subscribers: RefCell<Vec<(u64, Rc<RefCell<Reaction>>)>>,
}

impl MutationBus {
  #[must_use]
  pub fn new() -> Rc<Self> {
    Rc::new(Self {
      next_id: Cell::new(0),
      subscribers: RefCell::new(Vec::new()),
    })
  }

  /// Delivers one batch of notifications, running each subscriber's
  /// reaction once, in subscription order.
  pub fn notify(&self) {
    let reactions: Vec<Rc<RefCell<Reaction>>> = self
      .subscribers
      .borrow()
      .iter()
      .map(|(_, reaction)| Rc::clone(reaction))
      .collect();

    for reaction in reactions {
      (reaction.borrow_mut())();
    }
  }
}

/// Subscribes `reaction` to every future notification batch on `bus`.
pub fn watch(
  bus: &Rc<MutationBus>,
  reaction: impl FnMut() + 'static,
) -> Subscription {
  let id = bus.next_id.get();

  bus.next_id.set(id + 1);

  let reaction: Reaction = Box::new(reaction);

  bus
    .subscribers
    .borrow_mut()
    .push((id, Rc::new(RefCell::new(reaction))));

  Subscription {
    bus: Rc::downgrade(bus),
    id,
  }
}

/// Handle for one subscription. Dropping it without calling
/// [`Subscription::cancel`] leaves the subscription live for the bus's
/// lifetime, which is what a page-lifetime watcher wants.
pub struct Subscription {
  bus: Weak<MutationBus>,
  id: u64,
}

impl Subscription {
  pub fn cancel(self) {
    if let Some(bus) = self.bus.upgrade() {
      bus.subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
    }
  }
}
