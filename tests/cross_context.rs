//! Two stores sharing one storage area stand in for two open tabs: writes
//! are last-write-wins, and a context only notices foreign writes when the
//! host forwards the change signal into `handle_external_change`.

use std::{cell::RefCell, rc::Rc};

use satchel::{fixtures::demo_catalog, prelude::*};
use testresult::TestResult;

fn id(raw: u32) -> ProductId {
    ProductId::new(raw)
}

/// Keeps the latest badge text and the changes seen, like a page would.
#[derive(Default)]
struct PageState {
    badge: Rc<RefCell<String>>,
    changes: Rc<RefCell<Vec<CartChange>>>,
}

impl CartObserver for PageState {
    fn cart_changed(&mut self, cart: &Cart, change: &CartChange) {
        *self.badge.borrow_mut() = count_badge(cart);
        self.changes.borrow_mut().push(change.clone());
    }
}

#[test]
fn a_write_in_one_context_is_visible_after_the_change_signal() -> TestResult {
    let shared = Rc::new(RefCell::new(MemoryStorage::new()));

    let mut tab_a = CartStore::new(Rc::clone(&shared), demo_catalog()?);
    let mut tab_b = CartStore::new(Rc::clone(&shared), demo_catalog()?);

    let page = PageState::default();
    let badge = Rc::clone(&page.badge);
    let changes = Rc::clone(&page.changes);
    tab_b.subscribe(Box::new(page));

    tab_a.add(id(1), 2);

    // Nothing reaches tab B until the host forwards the storage signal.
    assert!(changes.borrow().is_empty(), "expected no notifications yet");

    tab_b.handle_external_change(DEFAULT_STORAGE_KEY);

    assert_eq!(changes.borrow().as_slice(), [CartChange::Reloaded]);
    assert_eq!(badge.borrow().as_str(), "2");
    assert_eq!(tab_b.read().get(id(1)).map(LineItem::quantity), Some(2));

    Ok(())
}

#[test]
fn signals_for_unrelated_keys_do_not_refresh() -> TestResult {
    let shared = Rc::new(RefCell::new(MemoryStorage::new()));

    let mut tab = CartStore::new(Rc::clone(&shared), demo_catalog()?);

    let page = PageState::default();
    let changes = Rc::clone(&page.changes);
    tab.subscribe(Box::new(page));

    tab.handle_external_change("unrelated_key");

    assert!(changes.borrow().is_empty(), "expected no notifications");

    Ok(())
}

#[test]
fn concurrent_writers_are_last_write_wins() -> TestResult {
    let shared = Rc::new(RefCell::new(MemoryStorage::new()));

    let mut tab_a = CartStore::new(Rc::clone(&shared), demo_catalog()?);
    let mut tab_b = CartStore::new(Rc::clone(&shared), demo_catalog()?);

    tab_a.add(id(1), 1);
    tab_b.clear();

    // B's clear clobbered A's write; both contexts now read empty.
    assert!(tab_a.read().is_empty());
    assert!(tab_b.read().is_empty());

    tab_a.add(id(2), 1);
    tab_b.add(id(3), 1);

    // Each writer read the latest state first, so both lines survive.
    let cart = tab_a.read();
    assert_eq!(cart.len(), 2);

    Ok(())
}

#[test]
fn separate_processes_share_a_cart_through_files() -> TestResult {
    let dir = tempfile::tempdir()?;

    let mut first = CartStore::new(FileStorage::new(dir.path()), demo_catalog()?);
    first.add(id(2), 3);
    drop(first);

    // A later "page load" over the same directory sees the persisted cart.
    let mut second = CartStore::new(FileStorage::new(dir.path()), demo_catalog()?);

    let page = PageState::default();
    let badge = Rc::clone(&page.badge);
    second.subscribe(Box::new(page));

    second.refresh();

    assert_eq!(badge.borrow().as_str(), "3");
    assert_eq!(second.read().get(id(2)).map(LineItem::quantity), Some(3));

    Ok(())
}

#[test]
fn every_display_refreshes_on_every_mutation() -> TestResult {
    let mut store = CartStore::new(MemoryStorage::new(), demo_catalog()?);

    let first_badge = PageState::default();
    let second_badge = PageState::default();
    let first = Rc::clone(&first_badge.badge);
    let second = Rc::clone(&second_badge.badge);

    store.subscribe(Box::new(first_badge));
    store.subscribe(Box::new(second_badge));

    store.add(id(1), 2);
    assert_eq!(first.borrow().as_str(), "2");
    assert_eq!(second.borrow().as_str(), "2");

    store.remove(id(1));
    assert_eq!(first.borrow().as_str(), "0");
    assert_eq!(second.borrow().as_str(), "0");

    Ok(())
}
