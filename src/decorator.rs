//! Decorator: express delivery layered over any delivery system.
//!
//! [`ExpressDelivery`] is the only wrapper. It implements [`DeliverySystem`]
//! itself, so it can wrap a base system, a boxed trait object, or another
//! `ExpressDelivery`.
//!
//! Tracking is not part of every delivery system. Callers ask for it with
//! [`DeliverySystem::as_tracking`], a capability-narrowing query that each
//! implementor answers for itself; no runtime type inspection is involved.

use chrono::Utc;
use rust_decimal::Decimal;

/// Flat fee added by each express layer.
pub const EXPRESS_SURCHARGE: Decimal = Decimal::TEN;

const EXPRESS_SUFFIX: &str = " (Express)";

pub trait DeliverySystem {
    fn cost(&self) -> Decimal;
    fn description(&self) -> String;
    fn delivery_days(&self) -> u32;

    /// Tracking operations, if this system offers them.
    fn as_tracking(&self) -> Option<&dyn Tracking> {
        None
    }
}

/// Extra operations available only on express delivery.
pub trait Tracking {
    fn track_delivery(&self, tracking_number: &str) -> String;
    fn express_cost(&self) -> Decimal;
}

// =============================================================================
// Base systems
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardDelivery {
    Courier,
    Postal,
    Pickup,
}

impl StandardDelivery {
    pub const ALL: [StandardDelivery; 3] = [
        StandardDelivery::Courier,
        StandardDelivery::Postal,
        StandardDelivery::Pickup,
    ];
}

impl DeliverySystem for StandardDelivery {
    fn cost(&self) -> Decimal {
        match self {
            StandardDelivery::Courier => Decimal::new(50, 1),
            StandardDelivery::Postal => Decimal::new(25, 1),
            StandardDelivery::Pickup => Decimal::ZERO,
        }
    }

    fn description(&self) -> String {
        match self {
            StandardDelivery::Courier => "Courier delivery",
            StandardDelivery::Postal => "Postal delivery",
            StandardDelivery::Pickup => "Store pickup",
        }
        .to_string()
    }

    fn delivery_days(&self) -> u32 {
        match self {
            StandardDelivery::Courier => 3,
            StandardDelivery::Postal => 7,
            StandardDelivery::Pickup => 1,
        }
    }
}

impl<D: DeliverySystem + ?Sized> DeliverySystem for Box<D> {
    fn cost(&self) -> Decimal {
        (**self).cost()
    }

    fn description(&self) -> String {
        (**self).description()
    }

    fn delivery_days(&self) -> u32 {
        (**self).delivery_days()
    }

    fn as_tracking(&self) -> Option<&dyn Tracking> {
        (**self).as_tracking()
    }
}

// =============================================================================
// Decorator
// =============================================================================

/// Twice as fast (never under a day), [`EXPRESS_SURCHARGE`] more expensive.
#[derive(Debug, Clone)]
pub struct ExpressDelivery<D: DeliverySystem> {
    inner: D,
}

impl<D: DeliverySystem> ExpressDelivery<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }

    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: DeliverySystem> DeliverySystem for ExpressDelivery<D> {
    fn cost(&self) -> Decimal {
        let cost = self.inner.cost() + EXPRESS_SURCHARGE;
        tracing::debug!(%cost, "express surcharge applied");
        cost
    }

    fn description(&self) -> String {
        format!("{}{}", self.inner.description(), EXPRESS_SUFFIX)
    }

    fn delivery_days(&self) -> u32 {
        (self.inner.delivery_days() / 2).max(1)
    }

    fn as_tracking(&self) -> Option<&dyn Tracking> {
        Some(self)
    }
}

impl<D: DeliverySystem> Tracking for ExpressDelivery<D> {
    fn track_delivery(&self, tracking_number: &str) -> String {
        format!(
            "Express delivery {}: in transit, arriving in {} days",
            tracking_number,
            self.delivery_days()
        )
    }

    fn express_cost(&self) -> Decimal {
        self.cost()
    }
}

/// `TRK` followed by the current UTC time in nanoseconds.
pub fn new_tracking_number() -> String {
    let now = Utc::now();
    let stamp = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros());
    format!("TRK{}", stamp)
}
