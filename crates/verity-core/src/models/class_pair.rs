use serde::{Deserialize, Serialize};

use super::Label;

/// One value per class, indexed by [`Label`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassPair<T> {
    pub fabricated: T,
    pub genuine: T,
}

impl<T> ClassPair<T> {
    pub fn new(fabricated: T, genuine: T) -> Self {
        Self {
            fabricated,
            genuine,
        }
    }

    /// Build a pair by evaluating `f` once per class, class A first.
    pub fn from_fn(mut f: impl FnMut(Label) -> T) -> Self {
        let fabricated = f(Label::Fabricated);
        let genuine = f(Label::Genuine);
        Self {
            fabricated,
            genuine,
        }
    }

    pub fn get(&self, label: Label) -> &T {
        match label {
            Label::Fabricated => &self.fabricated,
            Label::Genuine => &self.genuine,
        }
    }

    pub fn get_mut(&mut self, label: Label) -> &mut T {
        match label {
            Label::Fabricated => &mut self.fabricated,
            Label::Genuine => &mut self.genuine,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ClassPair<U> {
        ClassPair {
            fabricated: f(self.fabricated),
            genuine: f(self.genuine),
        }
    }
}
