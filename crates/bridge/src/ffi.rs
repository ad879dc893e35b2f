//! C ABI exports
//!
//! Each calling thread gets its own [`Bridge`]. Strings cross the boundary as
//! NUL-terminated UTF-8. A null or non-UTF-8 argument is treated like an
//! unknown id: mutations do nothing, queries return "".
//!
//! Returned pointers stay valid until the next string-returning call on the
//! same thread. Callers must copy the value if they need it longer.

use std::cell::RefCell;
use std::ffi::{c_char, c_int, CStr, CString};

use dom::workload;
use dom::ElementRegistry;

use crate::session::Bridge;

thread_local! {
    static BRIDGE: RefCell<Bridge> = RefCell::new(Bridge::new());

    /// Backing storage for the last returned string
    static RETURN_SLOT: RefCell<CString> = RefCell::new(CString::default());
}

fn with_registry<R>(f: impl FnOnce(&mut ElementRegistry) -> R) -> R {
    BRIDGE.with(|bridge| f(bridge.borrow_mut().registry_mut()))
}

/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives the call.
unsafe fn read_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Park `value` in the return slot and hand out a pointer to it
fn hand_back(value: &str) -> *const c_char {
    // Interior NUL would end the C string there anyway
    let value = value.split('\0').next().unwrap_or_default();
    let owned = CString::new(value).unwrap_or_default();

    RETURN_SLOT.with(|slot| {
        let mut slot = slot.borrow_mut();
        *slot = owned;
        slot.as_ptr()
    })
}

#[no_mangle]
pub extern "C" fn get_element_count() -> c_int {
    with_registry(|registry| c_int::try_from(registry.element_count()).unwrap_or(c_int::MAX))
}

/// # Safety
/// `id` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn add_element(id: *const c_char) {
    if let Some(id) = read_str(id) {
        with_registry(|registry| {
            registry.create(id);
        });
    }
}

/// # Safety
/// Every argument must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn set_element_attr(
    id: *const c_char,
    key: *const c_char,
    value: *const c_char,
) {
    if let (Some(id), Some(key), Some(value)) = (read_str(id), read_str(key), read_str(value)) {
        with_registry(|registry| registry.set_attribute(id, key, value));
    }
}

/// # Safety
/// Every argument must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn get_element_attr(id: *const c_char, key: *const c_char) -> *const c_char {
    match (read_str(id), read_str(key)) {
        (Some(id), Some(key)) => with_registry(|registry| hand_back(registry.get_attribute(id, key))),
        _ => hand_back(""),
    }
}

/// # Safety
/// Every argument must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn append_child(parent_id: *const c_char, child_id: *const c_char) {
    if let (Some(parent_id), Some(child_id)) = (read_str(parent_id), read_str(child_id)) {
        with_registry(|registry| registry.attach_child(parent_id, child_id));
    }
}

/// # Safety
/// `parent_id` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn get_first_child(parent_id: *const c_char) -> *const c_char {
    match read_str(parent_id) {
        Some(parent_id) => with_registry(|registry| hand_back(registry.first_child(parent_id))),
        None => hand_back(""),
    }
}

#[no_mangle]
pub extern "C" fn clear() {
    with_registry(ElementRegistry::clear);
}

/// Bulk creation workload, run entirely on this side of the boundary
#[no_mangle]
pub extern "C" fn case_create_elements() {
    with_registry(|registry| {
        workload::create_elements(
            registry,
            workload::ELEMENT_COUNT,
            workload::ATTRS_PER_ELEMENT,
        )
    });
}

/// Restructuring workload, run entirely on this side of the boundary
#[no_mangle]
pub extern "C" fn case_restruct_tree() {
    with_registry(|registry| {
        workload::restructure_tree(
            registry,
            workload::RESTRUCTURE_PARENTS,
            workload::RESTRUCTURE_FAN_OUT,
        );
    });
}
