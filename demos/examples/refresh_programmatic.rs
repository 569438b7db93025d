// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Programmatic refresh and re-attachment.
//!
//! This example starts a refresh before any scroll view exists, attaches to
//! one view, moves to another, and finally drops the controller. Each step
//! prints the insets of both views so you can see that every view gets its
//! original insets back.
//!
//! Run:
//! - `cargo run -p understory_examples --example refresh_programmatic`

use std::rc::Rc;

use kurbo::Insets;
use tracing_subscriber::EnvFilter;
use understory_refresh::{RefreshConfig, RefreshController, ScrollSource, ScrollView};

fn top(view: &Rc<ScrollView>) -> f64 {
    view.content_insets().y0
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let list = Rc::new(ScrollView::with_insets(Insets::new(0.0, 10.0, 0.0, 0.0)));
    let grid = Rc::new(ScrollView::with_insets(Insets::new(0.0, 64.0, 0.0, 0.0)));

    let mut control: RefreshController<ScrollView> =
        RefreshController::new(RefreshConfig::default()).expect("default configuration is valid");

    println!("== begin_refreshing with no view ==");
    control.begin_refreshing();
    println!("  state={:?}", control.state());

    println!("== attach to list ==");
    control.attach(&Rc::downgrade(&list)).expect("attach list");
    println!("  list top={} grid top={}", top(&list), top(&grid));

    println!("== move to grid ==");
    control.attach(&Rc::downgrade(&grid)).expect("attach grid");
    println!("  list top={} grid top={}", top(&list), top(&grid));

    println!("== drop controller mid-refresh ==");
    drop(control);
    println!("  list top={} grid top={}", top(&list), top(&grid));
}
