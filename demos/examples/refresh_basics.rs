// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pull-to-refresh basics.
//!
//! This example drives a refresh control with two gestures over an in-memory
//! scroll view: a short pull that is released early, then a full pull past
//! the threshold that triggers the delegate. It prints the state and the top
//! inset after every delivery.
//!
//! Run:
//! - `cargo run -p understory_examples --example refresh_basics`
//! - `RUST_LOG=understory_refresh=debug cargo run -p understory_examples --example refresh_basics`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Insets;
use tracing_subscriber::EnvFilter;
use understory_refresh::{
    PullIndicator, RefreshConfig, RefreshController, RefreshDelegate, ScrollSample, ScrollSource,
    ScrollView, Subscription,
};

#[derive(Default)]
struct Inbox {
    triggers: Cell<u32>,
}

impl RefreshDelegate<ScrollView, PullIndicator> for Inbox {
    fn refresh_triggered(&self, control: &RefreshController<ScrollView>) {
        self.triggers.set(self.triggers.get() + 1);
        println!("  -> delegate: refresh triggered in {:?}", control.state());
    }
}

fn route(
    control: &mut RefreshController<ScrollView>,
    view: &Rc<ScrollView>,
    deliveries: Vec<(Subscription, ScrollSample)>,
) {
    for (sub, sample) in deliveries {
        control.handle_scroll(sub, sample);
        println!(
            "  y={:>7.1} dragging={:<5} state={:?} caption={:?} top_inset={}",
            sample.offset.y,
            sample.dragging,
            control.state(),
            control.indicator().caption(),
            view.content_insets().y0,
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let view = Rc::new(ScrollView::with_insets(Insets::new(0.0, 10.0, 0.0, 0.0)));
    let inbox = Rc::new(Inbox::default());
    let config = RefreshConfig::new(80.0).with_indicator_height(44.0);
    let mut control = RefreshController::new(config).expect("valid configuration");
    control
        .attach(&Rc::downgrade(&view))
        .expect("scroll view accepts subscriptions");
    control.set_delegate(&inbox);

    // Resting offset is -10 (the top inset); pulls are measured from there.
    println!("== Short pull, released early ==");
    for y in [-10.0, -30.0, -50.0] {
        let d = view.drag_to(y);
        route(&mut control, &view, d);
    }
    let d = view.release();
    route(&mut control, &view, d);

    println!("== Full pull past the threshold ==");
    for y in [-30.0, -60.0, -90.0, -100.0] {
        let d = view.drag_to(y);
        route(&mut control, &view, d);
    }
    let d = view.release();
    route(&mut control, &view, d);

    println!("== Refresh work done ==");
    control.end_refreshing();
    println!(
        "  state={:?} top_inset={} triggers={}",
        control.state(),
        view.content_insets().y0,
        inbox.triggers.get(),
    );
}
