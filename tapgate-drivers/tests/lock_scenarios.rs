//! Full access node over the real drivers and mock hardware

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use tapgate_core::config::LockConfig;
use tapgate_core::lock::{CheckOutcome, CombinationLock, LockState};
use tapgate_core::node::AccessNode;
use tapgate_core::traits::{StatusColor, StatusIndicator};
use tapgate_drivers::feedback::{RgbStatusLed, ToneGenerator};
use tapgate_drivers::input::ButtonPair;
use tapgate_drivers::matrix::{PatternRenderer, PixelDriver};
use tapgate_hal::{InputPin, OutputPin, PixelWire};

/// Shared nanosecond clock advanced by every delay
#[derive(Clone, Default)]
struct SimClock(Rc<Cell<u64>>);

impl SimClock {
    fn now_us(&self) -> u64 {
        self.0.get() / 1000
    }

    fn advance(&self, ns: u64) {
        self.0.set(self.0.get() + ns);
    }
}

impl DelayNs for SimClock {
    fn delay_ns(&mut self, ns: u32) {
        self.advance(ns as u64);
    }

    fn delay_us(&mut self, us: u32) {
        self.advance(us as u64 * 1000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.advance(ms as u64 * 1_000_000);
    }
}

/// Button pin replaying a scripted level per read; panics once exhausted
#[derive(Clone, Default)]
struct ScriptedButton(Rc<RefCell<VecDeque<bool>>>);

impl ScriptedButton {
    /// Queue raw levels, `true` meaning pressed (pin low)
    fn press_script(&self, pressed: &[bool]) {
        let mut queue = self.0.borrow_mut();
        queue.clear();
        queue.extend(pressed.iter().map(|p| !p));
    }

    fn remaining(&self) -> usize {
        self.0.borrow().len()
    }
}

impl InputPin for ScriptedButton {
    fn is_high(&self) -> bool {
        self.0
            .borrow_mut()
            .pop_front()
            .expect("button read past end of script")
    }
}

/// Output pin recording its level and rising edges
#[derive(Clone, Default)]
struct ProbePin {
    high: Rc<Cell<bool>>,
    rising: Rc<Cell<u32>>,
}

impl OutputPin for ProbePin {
    fn set_high(&mut self) {
        if !self.high.get() {
            self.rising.set(self.rising.get() + 1);
        }
        self.high.set(true);
    }

    fn set_low(&mut self) {
        self.high.set(false);
    }

    fn is_set_high(&self) -> bool {
        self.high.get()
    }
}

/// Data line keeping every frame
#[derive(Clone, Default)]
struct ProbeWire {
    pending: Rc<RefCell<Vec<u8>>>,
    frames: Rc<RefCell<Vec<Vec<u8>>>>,
}

impl ProbeWire {
    fn frame_count(&self) -> usize {
        self.frames.borrow().len()
    }

    fn last_frame(&self) -> Vec<u8> {
        self.frames.borrow().last().cloned().unwrap_or_default()
    }
}

impl PixelWire for ProbeWire {
    fn put_blocking(&mut self, byte: u8) {
        self.pending.borrow_mut().push(byte);
    }

    fn flush(&mut self) {
        let frame = std::mem::take(&mut *self.pending.borrow_mut());
        self.frames.borrow_mut().push(frame);
    }
}

type Node = AccessNode<
    ButtonPair<ScriptedButton, ScriptedButton>,
    ToneGenerator<ProbePin, SimClock>,
    PatternRenderer<ProbeWire, SimClock>,
    RgbStatusLed<ProbePin, ProbePin, ProbePin>,
    SimClock,
>;

struct Bench {
    node: Node,
    clock: SimClock,
    a: ScriptedButton,
    b: ScriptedButton,
    buzzer: ProbePin,
    wire: ProbeWire,
    red: ProbePin,
    green: ProbePin,
}

impl Bench {
    fn new() -> Self {
        let clock = SimClock::default();
        let a = ScriptedButton::default();
        let b = ScriptedButton::default();
        let buzzer = ProbePin::default();
        let wire = ProbeWire::default();
        let red = ProbePin::default();
        let green = ProbePin::default();

        let lock = CombinationLock::new(
            ButtonPair::new(a.clone(), b.clone()),
            ToneGenerator::new(buzzer.clone(), clock.clone()),
            PatternRenderer::new(PixelDriver::new(wire.clone(), clock.clone())),
            RgbStatusLed::new(red.clone(), green.clone(), ProbePin::default()),
            clock.clone(),
            LockConfig::default(),
        );

        Self {
            node: AccessNode::new(lock),
            clock,
            a,
            b,
            buzzer,
            wire,
            red,
            green,
        }
    }

    /// Script one attempt as a sequence of polls (one channel pressed per poll)
    fn script(&self, presses: &str) {
        let a: Vec<bool> = presses.chars().map(|c| c == 'A').collect();
        let b: Vec<bool> = presses.chars().map(|c| c == 'B').collect();
        self.a.press_script(&a);
        self.b.press_script(&b);
    }
}

fn lit_cells(frame: &[u8]) -> usize {
    frame.chunks(3).filter(|c| c.iter().any(|&v| v != 0)).count()
}

/// Every lit cell of a frame has these (g, r, b) bytes
fn all_lit_are(frame: &[u8], grb: [u8; 3]) -> bool {
    frame
        .chunks(3)
        .filter(|c| c.iter().any(|&v| v != 0))
        .all(|c| c == grb)
}

#[test]
fn boot_shows_red_cross() {
    let mut bench = Bench::new();
    bench.node.boot();

    assert!(bench.red.is_set_high());
    assert!(!bench.green.is_set_high());
    let frame = bench.wire.last_frame();
    assert_eq!(lit_cells(&frame), 9);
    assert!(all_lit_are(&frame, [0, 255, 0]));
}

#[test]
fn any_interleaving_unlocks() {
    for order in ["AAABB", "BABAA", "BBAAA", "ABABA", "A.B.A.B..A"] {
        let mut bench = Bench::new();
        bench.script(order);
        assert_eq!(bench.node.lock_mut().check(), CheckOutcome::Accepted, "{order}");
        assert_eq!(bench.node.lock().failed_attempts(), 0);
    }
}

#[test]
fn unlock_cycle_waits_for_close_press() {
    let mut bench = Bench::new();
    bench.node.boot();

    // Attempt, then two idle polls and a close press on B
    bench.a.press_script(&[true, true, true, false, false, false, false, false]);
    bench.b.press_script(&[false, false, false, true, true, false, false, true]);

    let report = bench.node.run_cycle();
    assert_eq!(report.outcome, CheckOutcome::Accepted);
    assert!(!report.locked_out);
    assert_eq!(bench.a.remaining(), 0);
    assert_eq!(bench.b.remaining(), 0);

    // 5 clicks of 100 cycles plus the rising chime
    assert_eq!(bench.buzzer.rising.get(), 5 * 100 + 88 + 104 + 131);

    // boot cross, green fill, idle cross
    let frames = bench.wire.frames.borrow();
    assert_eq!(frames.len(), 3);
    assert_eq!(lit_cells(&frames[1]), 25);
    assert!(all_lit_are(&frames[1], [255, 0, 0]));
    assert_eq!(lit_cells(&frames[2]), 9);

    assert!(bench.red.is_set_high());
    assert!(!bench.green.is_set_high());
}

#[test]
fn failed_attempt_blinks_and_counts() {
    let mut bench = Bench::new();
    bench.script("AAAAB");

    let report = bench.node.run_cycle();
    assert_eq!(report.outcome, CheckOutcome::Rejected);
    assert_eq!(report.failed_attempts, 1);

    // 3 x (cross, dark) then the idle cross
    let frames = bench.wire.frames.borrow();
    let lit: Vec<usize> = frames.iter().map(|f| lit_cells(f)).collect();
    assert_eq!(lit, vec![9, 0, 9, 0, 9, 0, 9]);
    assert_eq!(bench.buzzer.rising.get(), 5 * 100 + 131 + 104 + 88);
}

#[test]
fn sixth_call_locks_out_then_samples_again() {
    let mut bench = Bench::new();

    for n in 1..=5 {
        bench.script("BBBBB");
        assert_eq!(bench.node.lock_mut().check(), CheckOutcome::Rejected);
        assert_eq!(bench.node.lock().failed_attempts(), n);
    }
    assert_eq!(bench.node.lock().state(), LockState::LockedOut);

    // Empty scripts: any button read would panic
    bench.script("");
    let frames_before = bench.wire.frame_count();
    let rising_before = bench.buzzer.rising.get();
    let start = bench.clock.now_us();

    assert_eq!(bench.node.lock_mut().check(), CheckOutcome::Rejected);

    // Cooldown plus the reset gap of the blue frame and the idle cross
    assert_eq!(bench.clock.now_us() - start, 10_000_000 + 2 * 100);
    assert_eq!(bench.node.lock().failed_attempts(), 0);
    assert_eq!(
        bench.node.lock_mut().status_mut().color(),
        StatusColor::Red
    );
    assert_eq!(bench.buzzer.rising.get(), rising_before);

    {
        let frames = bench.wire.frames.borrow();
        assert_eq!(frames.len(), frames_before + 2);
        assert!(all_lit_are(&frames[frames_before], [0, 0, 255]));
        assert_eq!(lit_cells(&frames[frames_before]), 25);
        assert_eq!(lit_cells(&frames[frames_before + 1]), 9);
    }

    bench.script("AABAB");
    assert_eq!(bench.node.lock_mut().check(), CheckOutcome::Accepted);
}

#[test]
fn sampling_time_per_press() {
    let mut bench = Bench::new();
    bench.script("AAABB");
    let start = bench.clock.now_us();
    bench.node.lock_mut().check();

    // Per poll: 100 ms click, 200 ms hold, 50 ms poll interval
    assert_eq!(bench.clock.now_us() - start, 5 * (100_000 + 200_000 + 50_000));
}
