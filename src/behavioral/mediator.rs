//! Behavioral Pattern: Mediator
//! Example: a station manager serializing access to a single platform
//!
//! Trains never talk to each other. They ask the [`StationManager`] for the
//! platform and tell it when they leave; the manager hands the platform to
//! the next waiting train.
//!
//! Run with: cargo run --bin mediator

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::transcript::Transcript;

pub trait Train {
    fn name(&self) -> &str;
    fn arrive(self: Rc<Self>);
    fn depart(self: Rc<Self>);
    fn permit_arrival(self: Rc<Self>);
}

pub trait Mediator {
    /// Grants the platform, or queues `train` and returns `false`.
    fn can_arrive(&self, train: Rc<dyn Train>) -> bool;

    /// Frees the platform if `train` holds it, otherwise drops `train` from
    /// the wait list.
    fn notify_about_departure(&self, train: &dyn Train);
}

/// Platform token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Free,
    Occupied(String),
}

struct StationState {
    platform: Platform,
    queue: VecDeque<Rc<dyn Train>>,
}

pub struct StationManager {
    state: RefCell<StationState>,
}

impl StationManager {
    pub fn new() -> Self {
        StationManager {
            state: RefCell::new(StationState {
                platform: Platform::Free,
                queue: VecDeque::new(),
            }),
        }
    }

    pub fn platform(&self) -> Platform {
        self.state.borrow().platform.clone()
    }

    /// Names of queued trains, front first.
    pub fn waiting(&self) -> Vec<String> {
        self.state
            .borrow()
            .queue
            .iter()
            .map(|train| train.name().to_string())
            .collect()
    }
}

impl Default for StationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Mediator for StationManager {
    fn can_arrive(&self, train: Rc<dyn Train>) -> bool {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;

        match &state.platform {
            Platform::Free => {
                debug!(train = train.name(), "platform free -> occupied");
                state.platform = Platform::Occupied(train.name().to_string());
                true
            }
            Platform::Occupied(holder) => {
                debug!(train = train.name(), holder = %holder, "platform occupied, queueing");
                state.queue.push_back(train);
                false
            }
        }
    }

    fn notify_about_departure(&self, train: &dyn Train) {
        // Release the borrow before the next train re-enters `can_arrive`.
        let next = {
            let mut state = self.state.borrow_mut();
            let holds_platform =
                matches!(&state.platform, Platform::Occupied(holder) if holder == train.name());

            if holds_platform {
                debug!(train = train.name(), "platform occupied -> free");
                state.platform = Platform::Free;
                state.queue.pop_front()
            } else {
                let before = state.queue.len();
                state.queue.retain(|queued| queued.name() != train.name());
                debug!(
                    train = train.name(),
                    removed = before - state.queue.len(),
                    "departure without holding the platform"
                );
                None
            }
        };

        if let Some(next) = next {
            debug!(train = next.name(), "permitting next queued train");
            next.permit_arrival();
        }
    }
}

/// Station handle shared by both train kinds; a closed station turns
/// arrivals and departures into no-ops.
struct Route {
    name: String,
    mediator: Weak<dyn Mediator>,
    out: Transcript,
}

impl Route {
    fn new(name: impl Into<String>, mediator: Weak<dyn Mediator>, out: &Transcript) -> Self {
        Route {
            name: name.into(),
            mediator,
            out: out.clone(),
        }
    }

    fn station(&self) -> Option<Rc<dyn Mediator>> {
        let station = self.mediator.upgrade();
        if station.is_none() {
            warn!(train = %self.name, "station already closed");
        }
        station
    }

    fn arrive(&self, train: Rc<dyn Train>) {
        let Some(station) = self.station() else {
            return;
        };
        if !station.can_arrive(train) {
            self.out.line(format!("{}: Arrival blocked, waiting", self.name));
            return;
        }
        self.out.line(format!("{}: Arrived", self.name));
    }

    fn depart(&self, train: &dyn Train) {
        self.out.line(format!("{}: Leaving", self.name));
        if let Some(station) = self.station() {
            station.notify_about_departure(train);
        }
    }
}

pub struct PassengerTrain {
    route: Route,
}

impl PassengerTrain {
    pub fn new(name: impl Into<String>, mediator: Weak<dyn Mediator>, out: &Transcript) -> Rc<Self> {
        Rc::new(PassengerTrain {
            route: Route::new(name, mediator, out),
        })
    }
}

impl Train for PassengerTrain {
    fn name(&self) -> &str {
        &self.route.name
    }

    fn arrive(self: Rc<Self>) {
        self.route.arrive(self.clone());
    }

    fn depart(self: Rc<Self>) {
        self.route.depart(&*self);
    }

    fn permit_arrival(self: Rc<Self>) {
        self.route
            .out
            .line(format!("{}: Arrival permitted, arriving", self.route.name));
        self.arrive();
    }
}

pub struct FreightTrain {
    route: Route,
}

impl FreightTrain {
    pub fn new(name: impl Into<String>, mediator: Weak<dyn Mediator>, out: &Transcript) -> Rc<Self> {
        Rc::new(FreightTrain {
            route: Route::new(name, mediator, out),
        })
    }
}

impl Train for FreightTrain {
    fn name(&self) -> &str {
        &self.route.name
    }

    fn arrive(self: Rc<Self>) {
        self.route.arrive(self.clone());
    }

    fn depart(self: Rc<Self>) {
        self.route.depart(&*self);
    }

    fn permit_arrival(self: Rc<Self>) {
        self.route
            .out
            .line(format!("{}: Arrival permitted", self.route.name));
        self.arrive();
    }
}

pub fn demo(out: &Transcript) -> Result<(), CatalogError> {
    let station = Rc::new(StationManager::new());

    let passenger = PassengerTrain::new("PassengerTrain", Rc::<StationManager>::downgrade(&station), out);
    let freight = FreightTrain::new("FreightTrain", Rc::<StationManager>::downgrade(&station), out);

    Rc::clone(&passenger).arrive();
    Rc::clone(&freight).arrive();
    passenger.depart();
    Ok(())
}
