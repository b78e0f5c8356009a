//! C ABI entry points.
//!
//! Each function forwards to a per-thread [`Engine`]. Handles are only
//! meaningful on the thread that created them.

use std::cell::RefCell;

use crate::engine::Engine;

thread_local! {
    static ENGINE: RefCell<Engine> = RefCell::new(Engine::new());
}

fn with_engine<R>(f: impl FnOnce(&mut Engine) -> R) -> R {
    ENGINE.with_borrow_mut(f)
}

#[unsafe(no_mangle)]
pub extern "C" fn make_grid(w: f64, h: f64) -> f64 {
    with_engine(|e| e.make_grid(w, h))
}

#[unsafe(no_mangle)]
pub extern "C" fn destroy_grid(grid: f64) -> f64 {
    with_engine(|e| e.destroy_grid(grid));
    0.0
}

#[unsafe(no_mangle)]
pub extern "C" fn get_grid_width(grid: f64) -> f64 {
    with_engine(|e| e.grid_width(grid))
}

#[unsafe(no_mangle)]
pub extern "C" fn get_grid_height(grid: f64) -> f64 {
    with_engine(|e| e.grid_height(grid))
}

#[unsafe(no_mangle)]
pub extern "C" fn get_grid_value(grid: f64, x: f64, y: f64) -> f64 {
    with_engine(|e| e.grid_value(grid, x, y))
}

#[unsafe(no_mangle)]
pub extern "C" fn set_grid_value(grid: f64, x: f64, y: f64, value: f64) -> f64 {
    with_engine(|e| e.set_grid_value(grid, x, y, value))
}

#[unsafe(no_mangle)]
pub extern "C" fn set_grid_rect(grid: f64, x: f64, y: f64, w: f64, h: f64, value: f64) -> f64 {
    with_engine(|e| e.set_grid_rect(grid, x, y, w, h, value))
}

#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn make_path(
    grid: f64,
    xs: f64,
    ys: f64,
    xg: f64,
    yg: f64,
    diag: f64,
    max_len: f64,
) -> f64 {
    with_engine(|e| e.make_path(grid, xs, ys, xg, yg, diag, max_len))
}

#[unsafe(no_mangle)]
pub extern "C" fn path_get_length(path: f64) -> f64 {
    with_engine(|e| e.path_length(path))
}

#[unsafe(no_mangle)]
pub extern "C" fn path_get_xfirst(path: f64) -> f64 {
    with_engine(|e| e.path_front_x(path))
}

#[unsafe(no_mangle)]
pub extern "C" fn path_get_yfirst(path: f64) -> f64 {
    with_engine(|e| e.path_front_y(path))
}

#[unsafe(no_mangle)]
pub extern "C" fn path_get_x(path: f64, index: f64) -> f64 {
    with_engine(|e| e.path_x(path, index))
}

#[unsafe(no_mangle)]
pub extern "C" fn path_get_y(path: f64, index: f64) -> f64 {
    with_engine(|e| e.path_y(path, index))
}

#[unsafe(no_mangle)]
pub extern "C" fn path_pop(path: f64) -> f64 {
    with_engine(|e| e.path_pop(path));
    0.0
}

#[unsafe(no_mangle)]
pub extern "C" fn path_destroy(path: f64) -> f64 {
    with_engine(|e| e.destroy_path(path));
    0.0
}
