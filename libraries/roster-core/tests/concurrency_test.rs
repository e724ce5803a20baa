//! Concurrent access to a shared store
//!
//! Many threads hammer one `UserStore` at once; ids and emails must stay
//! pairwise distinct.

use roster_core::{NewUser, UserPatch, UserStore};
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 16;
const CREATES_PER_THREAD: usize = 50;

#[test]
fn concurrent_creates_assign_distinct_ids() {
    let store = Arc::new(UserStore::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..CREATES_PER_THREAD {
                    store
                        .insert(NewUser::new(
                            format!("user {t}-{i}"),
                            format!("user{t}-{i}@example.com"),
                        ))
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let users = store.list();
    assert_eq!(users.len(), THREADS * CREATES_PER_THREAD);

    let ids: HashSet<_> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids.len(), users.len(), "duplicate ids assigned");
    assert_eq!(
        ids.iter().map(|id| id.get()).max(),
        Some((THREADS * CREATES_PER_THREAD) as u64)
    );
}

#[test]
fn concurrent_creates_with_same_email_admit_exactly_one() {
    let store = Arc::new(UserStore::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store
                    .insert(NewUser::new(format!("racer {t}"), "race@example.com"))
                    .is_ok()
            })
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|won| *won)
        .count();

    assert_eq!(winners, 1);
    assert_eq!(store.len(), 1);
}

#[test]
fn concurrent_email_swaps_never_duplicate() {
    let store = Arc::new(UserStore::seeded());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let target = store.list()[t % 2].id;
                // Contend on one shared address from both accounts
                let _ = store.update_partial(
                    target,
                    UserPatch::default().with_email("shared@example.com"),
                );
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let emails: Vec<_> = store.list().into_iter().map(|u| u.email).collect();
    let unique: HashSet<_> = emails.iter().collect();
    assert_eq!(unique.len(), emails.len());
    assert!(emails.iter().any(|e| e == "shared@example.com"));
}
