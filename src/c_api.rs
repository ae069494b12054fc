// C ABI over an explicit engine handle. Every string returned to C is JSON and
// must be released with `humanize_free_string`.
use crate::core::engine::Humanizer;
use crate::core::types::Style;
use crate::error::HumanizeError;
use crate::lexicon::MemoryLexicon;
use crate::persistence::open_or_seed;
use libc::c_char;
use serde::Serialize;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::ptr;
use tracing::error;

pub struct HumanizeHandle {
    engine: Humanizer<MemoryLexicon>,
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Reply<T: Serialize> {
    Ok(T),
    Error(String),
}

fn to_c_string<T: Serialize>(reply: &Reply<T>) -> *mut c_char {
    let json = serde_json::to_string(reply)
        .unwrap_or_else(|_| r#"{"error":"serialization failed"}"#.to_string());
    // serde_json escapes control characters, so there is no interior NUL.
    CString::new(json).map_or(ptr::null_mut(), CString::into_raw)
}

unsafe fn read_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str, HumanizeError> {
    if ptr.is_null() {
        return Err(HumanizeError::MalformedInput(format!("{} is null", what)));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| HumanizeError::MalformedInput(format!("{} is not valid UTF-8", what)))
}

fn respond<T, F>(f: F) -> *mut c_char
where
    T: Serialize,
    F: FnOnce() -> Result<T, HumanizeError>,
{
    let reply = match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Reply::Ok(value),
        Ok(Err(e)) => Reply::Error(e.to_string()),
        Err(_) => {
            error!("panic inside the C API");
            Reply::Error("internal panic".to_string())
        }
    };
    to_c_string(&reply)
}

/// Opens the lexicon snapshot at `path` (or the built-in lexicon when it does
/// not exist) and returns a handle, or null on failure.
#[no_mangle]
pub extern "C" fn humanize_engine_open(path: *const c_char) -> *mut HumanizeHandle {
    let result = catch_unwind(|| -> Result<HumanizeHandle, HumanizeError> {
        let path = unsafe { read_str(path, "path")? };
        let lexicon = open_or_seed(Path::new(path), true)?;
        Ok(HumanizeHandle {
            engine: Humanizer::new(lexicon),
        })
    });
    match result {
        Ok(Ok(handle)) => Box::into_raw(Box::new(handle)),
        Ok(Err(e)) => {
            error!(error = %e, "could not open engine");
            ptr::null_mut()
        }
        Err(_) => {
            error!("panic while opening engine");
            ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "C" fn humanize_engine_free(handle: *mut HumanizeHandle) {
    if !handle.is_null() {
        unsafe { drop(Box::from_raw(handle)) };
    }
}

/// Humanizes `text`. `style` may be null to detect it.
#[no_mangle]
pub extern "C" fn humanize_text(
    handle: *const HumanizeHandle,
    text: *const c_char,
    style: *const c_char,
) -> *mut c_char {
    respond(|| {
        let handle = unsafe { handle.as_ref() }
            .ok_or_else(|| HumanizeError::MalformedInput("handle is null".to_string()))?;
        let text = unsafe { read_str(text, "text")? };
        let style = if style.is_null() {
            None
        } else {
            Some(unsafe { read_str(style, "style")? }.parse::<Style>()?)
        };
        handle.engine.humanize(text, style)
    })
}

#[no_mangle]
pub extern "C" fn humanize_detect(handle: *const HumanizeHandle, text: *const c_char) -> *mut c_char {
    respond(|| {
        let handle = unsafe { handle.as_ref() }
            .ok_or_else(|| HumanizeError::MalformedInput("handle is null".to_string()))?;
        let text = unsafe { read_str(text, "text")? };
        handle.engine.detect_style(text)
    })
}

#[no_mangle]
pub extern "C" fn humanize_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
