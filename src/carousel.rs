//! Circuit carousel with wrap-around prev/next controls.

use crate::config::{
    ACTIVE_CLASS, CAROUSEL_ITEM_SELECTOR, CAROUSEL_NEXT_SELECTOR, CAROUSEL_PREV_SELECTOR,
};
use crate::dom;
use crate::error::DashboardError;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

/// Position within a non-empty ring of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselIndex {
    current: usize,
    len: usize,
}

impl CarouselIndex {
    /// `None` for an empty carousel.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { current: 0, len })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    pub fn prev(&mut self) -> usize {
        self.current = (self.current + self.len - 1) % self.len;
        self.current
    }
}

struct Carousel {
    items: Vec<Element>,
    index: CarouselIndex,
}

impl Carousel {
    fn step(&mut self, forward: bool) {
        dom::remove_class(&self.items[self.index.current()], ACTIVE_CLASS);
        let current = if forward { self.index.next() } else { self.index.prev() };
        dom::add_class(&self.items[current], ACTIVE_CLASS);
    }
}

pub fn init_carousel() -> Result<(), DashboardError> {
    let (Some(prev), Some(next)) = (
        dom::query(CAROUSEL_PREV_SELECTOR),
        dom::query(CAROUSEL_NEXT_SELECTOR),
    ) else {
        return Ok(());
    };
    let items = dom::query_all(CAROUSEL_ITEM_SELECTOR);
    let Some(index) = CarouselIndex::new(items.len()) else {
        return Ok(());
    };
    dom::add_class(&items[0], ACTIVE_CLASS);

    let carousel = Rc::new(RefCell::new(Carousel { items, index }));
    let forward = carousel.clone();
    dom::listen(&next, "click", move |_| forward.borrow_mut().step(true))?;
    dom::listen(&prev, "click", move |_| carousel.borrow_mut().step(false))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_carousel_has_no_index() {
        assert_eq!(CarouselIndex::new(0), None);
    }

    #[test]
    fn wraps_both_ways() {
        let mut idx = CarouselIndex::new(3).unwrap();
        assert_eq!(idx.prev(), 2);
        assert_eq!(idx.next(), 0);
        assert_eq!(idx.next(), 1);
        assert_eq!(idx.next(), 2);
        assert_eq!(idx.next(), 0);
    }

    #[test]
    fn single_item_stays_put() {
        let mut idx = CarouselIndex::new(1).unwrap();
        assert_eq!(idx.next(), 0);
        assert_eq!(idx.prev(), 0);
    }
}
