#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tessera_core::event::{KeyCode, KeyEvent};
use tessera_core::op::{FocusOp, InputOp, Ops, SoftKeyboardOp};
use tessera_core::tag::Tag;
use tessera_runtime::{Delivery, KeyboardDecision, Router, RouterConfig};

const POOL: usize = 8;

#[derive(Debug, Arbitrary)]
enum Step {
    Register(u8),
    Focus(Option<u8>),
    Keyboard(bool),
    Save,
    Load(u8),
    EndFrame,
    Drain(u8),
    Inject(u8, u8),
    QueueKey(u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    bound: Option<u8>,
    steps: Vec<Step>,
}

fuzz_target!(|input: Input| {
    // `pool[POOL]` is never registered; only lookups can name it.
    let pool: Vec<Tag> = (0..=POOL).map(|_| Tag::new()).collect();
    let orphan = pool[POOL];
    let tag = |i: u8| pool[usize::from(i) % pool.len()];
    let registrable = |i: u8| pool[usize::from(i) % POOL];

    let mut config = RouterConfig::default();
    config.mailbox.max_queued_events = input.bound.map(|b| usize::from(b).max(1));
    let mut router = Router::with_config(config);

    let mut ops = Ops::new();
    let mut scopes = Vec::new();
    for step in input.steps {
        match step {
            Step::Register(i) => InputOp::new(registrable(i)).add(&mut ops),
            Step::Focus(i) => FocusOp::new(i.map(tag)).add(&mut ops),
            Step::Keyboard(show) => SoftKeyboardOp::new(show).add(&mut ops),
            Step::Save => scopes.push(ops.save()),
            Step::Load(i) => {
                if !scopes.is_empty() {
                    let id = scopes.remove(usize::from(i) % scopes.len());
                    ops.load(id);
                }
            }
            Step::EndFrame => {
                let decision = router.submit_frame(&ops);
                ops.reset();
                scopes.clear();

                assert!(!router.wakeup_pending(), "apply must reset wakeup");
                assert!(!router.is_registered(orphan), "orphan tag registered");
                assert_ne!(router.focused(), Some(orphan), "orphan tag focused");
                if let Some(f) = router.focused() {
                    assert!(router.is_registered(f), "focus holder not registered");
                }
                if decision == KeyboardDecision::Open {
                    assert!(router.focused().is_some(), "keyboard opened without focus");
                }
                if decision != KeyboardDecision::Keep {
                    assert_eq!(router.keyboard_visible(), decision == KeyboardDecision::Open);
                }
            }
            Step::Drain(i) => {
                let t = tag(i);
                let registered = router.is_registered(t);
                let events = router.drain_events(t);
                assert!(registered || events.is_empty(), "unregistered tag drained events");
                if !events.is_empty() {
                    assert!(router.wakeup_pending(), "delivery must wake");
                }
                assert_eq!(router.pending(t), 0);
            }
            Step::Inject(i, c) => {
                let t = tag(i);
                let delivery =
                    router.inject_external_event(t, KeyEvent::new(KeyCode::Char(char::from(c))).into());
                assert_eq!(
                    delivery == Delivery::Unregistered,
                    !router.is_registered(t)
                );
            }
            Step::QueueKey(c) => {
                let delivery = router.queue_key(KeyEvent::new(KeyCode::Char(char::from(c))));
                if router.focused().is_none() {
                    assert_eq!(delivery, Delivery::NoFocus);
                }
            }
        }
    }

    let stats = router.stats();
    assert!(stats.drained_events <= stats.synthetic_events + stats.external_events);
});
