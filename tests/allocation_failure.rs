use std::{
    alloc::{
        GlobalAlloc,
        Layout,
        System,
    },
    cell::Cell,
    ptr,
};

use lexiskip::{
    comparator::NaturalOrder,
    skiplist::{
        LevelGenerator,
        OrderedSkipList,
    },
    Error,
};

thread_local! {
    static FAIL_ALLOCATIONS: Cell<bool> = const { Cell::new(false) };
}

/// Hands every request to the system allocator, except on a thread that has
/// switched `FAIL_ALLOCATIONS` on.
struct SwitchableAlloc;

unsafe impl GlobalAlloc for SwitchableAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if FAIL_ALLOCATIONS.try_with(Cell::get).unwrap_or(false) {
            return ptr::null_mut();
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if FAIL_ALLOCATIONS.try_with(Cell::get).unwrap_or(false) {
            return ptr::null_mut();
        }
        System.realloc(ptr, layout, new_size)
    }
}

#[global_allocator]
static GLOBAL: SwitchableAlloc = SwitchableAlloc;

/// Run `f` with every allocation on this thread failing.
fn without_memory<R>(f: impl FnOnce() -> R) -> R {
    FAIL_ALLOCATIONS.with(|fail| fail.set(true));
    let out = f();
    FAIL_ALLOCATIONS.with(|fail| fail.set(false));
    out
}

struct FixedLevels(usize);

impl LevelGenerator for FixedLevels {
    fn total(&self) -> usize {
        4
    }

    fn random(&mut self) -> usize {
        self.0
    }
}

#[test]
fn test_failed_arena_growth_leaves_list_empty() {
    // the first insert registers its tracing callsite, which may allocate
    let mut warm_up =
        OrderedSkipList::with_level_generator(NaturalOrder, FixedLevels(3)).unwrap();
    warm_up.insert(0u32).unwrap();

    let mut list =
        OrderedSkipList::with_level_generator(NaturalOrder, FixedLevels(3)).unwrap();

    let res = without_memory(|| list.insert(7u32));

    assert!(matches!(res, Err(Error::AllocationFailed(_))));
    assert!(list.is_empty());
    assert_eq!(list.top_level(), 0);
    assert_eq!(list.search(&7), None);
    assert_eq!(list.iter().count(), 0);

    list.insert(7).unwrap();
    assert_eq!(list.search(&7), Some(&7));
    assert_eq!(list.top_level(), 2);
}

#[test]
fn test_failed_link_allocation_leaves_list_untouched() {
    let mut list =
        OrderedSkipList::with_level_generator(NaturalOrder, FixedLevels(1)).unwrap();
    list.insert(5u32).unwrap();

    // the arena has spare capacity now, so only the node's links need memory
    let res = without_memory(|| list.insert(6));

    assert!(matches!(res, Err(Error::AllocationFailed(_))));
    assert_eq!(list.len(), 1);
    assert_eq!(list.top_level(), 0);
    assert_eq!(list.search(&6), None);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5]);

    list.insert(6).unwrap();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 6]);
}
