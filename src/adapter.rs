//! Adapter: make a [`Donkey`] usable wherever a [`Transport`] is expected.
//!
//! The driver only knows how to travel by transport. A donkey can move and
//! eat but cannot drive, so a [`Saddle`] borrows the donkey and answers
//! `drive` by asking it to move. The donkey itself is never changed.

/// Target capability: something a driver can travel with.
pub trait Transport {
    fn drive(&self) -> String;
}

/// Source capability: what an animal can do on its own.
pub trait Animal {
    fn move_along(&self) -> String;
    fn eat(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Car;

impl Transport for Car {
    fn drive(&self) -> String {
        "The car drives along the road".to_string()
    }
}

/// Not a transport.
#[derive(Debug, Default, Clone, Copy)]
pub struct Donkey;

impl Animal for Donkey {
    fn move_along(&self) -> String {
        "The donkey walks slowly across the field".to_string()
    }

    fn eat(&self) -> String {
        "The donkey eats hay".to_string()
    }
}

/// Adapter from any [`Animal`] to [`Transport`].
///
/// Holds a shared borrow, so the animal stays usable once the saddle is
/// dropped (or even while it is still alive).
pub struct Saddle<'a, A: Animal + ?Sized> {
    animal: &'a A,
}

impl<'a, A: Animal + ?Sized> Saddle<'a, A> {
    pub fn new(animal: &'a A) -> Self {
        Self { animal }
    }

    pub fn animal(&self) -> &'a A {
        self.animal
    }
}

impl<A: Animal + ?Sized> Transport for Saddle<'_, A> {
    fn drive(&self) -> String {
        tracing::debug!("saddle forwards drive to move_along");
        self.animal.move_along()
    }
}

/// Client that only understands [`Transport`].
#[derive(Debug, Default)]
pub struct Driver;

impl Driver {
    pub fn travel(&self, transport: &dyn Transport) -> String {
        transport.drive()
    }
}
