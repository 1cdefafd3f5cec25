use crate::hooks::millis;
use gloo::timers::callback::Timeout;
use hush_core::{PreloaderCommand, PreloaderConfig, PreloaderEvent, PreloaderMachine, PreloaderPhase};
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Runs the machine's commands against real browser timers.
struct Driver {
    machine: RefCell<PreloaderMachine>,
    min_display: RefCell<Option<Timeout>>,
    fade: RefCell<Option<Timeout>>,
    phase: RwSignal<PreloaderPhase>,
    on_complete: Callback<()>,
}

impl Driver {
    fn dispatch(self: &Rc<Self>, event: PreloaderEvent) {
        let commands = self.machine.borrow_mut().handle(event);
        self.run(commands);
    }

    fn run(self: &Rc<Self>, commands: Vec<PreloaderCommand>) {
        self.phase.try_set(self.machine.borrow().phase());
        for command in commands {
            match command {
                PreloaderCommand::StartMinDisplay(delay) => {
                    *self.min_display.borrow_mut() =
                        Some(self.timer(delay, PreloaderEvent::MinDisplayElapsed));
                }
                PreloaderCommand::CancelMinDisplay => drop(self.min_display.borrow_mut().take()),
                PreloaderCommand::StartFade(delay) => {
                    *self.fade.borrow_mut() = Some(self.timer(delay, PreloaderEvent::FadeElapsed));
                }
                PreloaderCommand::CancelFade => drop(self.fade.borrow_mut().take()),
                PreloaderCommand::Complete => {
                    // Runs after the firing timer returns; the owner usually
                    // unmounts this component in response.
                    let on_complete = self.on_complete;
                    spawn_local(async move { on_complete.call(()) });
                }
            }
        }
    }

    fn timer(self: &Rc<Self>, delay: std::time::Duration, event: PreloaderEvent) -> Timeout {
        let driver = Rc::downgrade(self);
        Timeout::new(millis(delay), move || {
            if let Some(driver) = driver.upgrade() {
                driver.dispatch(event);
            }
        })
    }
}

/// Full-screen overlay shown while a page gets ready.
///
/// Stays opaque for the minimum display time (or until the optional video
/// ends or fails), fades out, then calls `on_complete` once.
#[component]
pub fn Preloader(
    #[prop(into)] on_complete: Callback<()>,
    #[prop(optional)] video_src: Option<&'static str>,
    #[prop(optional)] config: Option<PreloaderConfig>,
) -> impl IntoView {
    let phase = create_rw_signal(PreloaderPhase::Opaque);
    let driver = Rc::new(Driver {
        machine: RefCell::new(PreloaderMachine::new(config.unwrap_or_default())),
        min_display: RefCell::new(None),
        fade: RefCell::new(None),
        phase,
        on_complete,
    });

    let commands = driver.machine.borrow_mut().start();
    driver.run(commands);

    let on_ended = {
        let driver = Rc::clone(&driver);
        move |_| driver.dispatch(PreloaderEvent::VideoEnded)
    };
    let on_error = {
        let driver = Rc::clone(&driver);
        move |_| {
            tracing::warn!("preloader video failed to load");
            driver.dispatch(PreloaderEvent::VideoFailed)
        }
    };

    on_cleanup({
        let driver = Rc::clone(&driver);
        move || {
            let commands = driver.machine.borrow_mut().teardown();
            driver.run(commands);
        }
    });

    let opacity = move || match phase.get() {
        PreloaderPhase::Opaque => "opacity-100",
        PreloaderPhase::Fading | PreloaderPhase::Hidden => "opacity-0",
    };
    let pointer_events = move || if phase.get().is_visible() { "auto" } else { "none" };

    view! {
      <div
        class=move || format!(
          "fixed inset-0 z-50 flex items-center justify-center bg-black transition-opacity duration-100 {}",
          opacity(),
        )
        style:pointer-events=pointer_events
        aria-hidden="true"
      >
        {video_src.map(|src| view! {
          <div class="flex h-full w-full items-center justify-center text-center">
            <video
              src=src
              autoplay=true
              prop:muted=true
              playsinline=true
              class="w-[700px] object-cover"
              on:ended=on_ended.clone()
              on:error=on_error.clone()
            />
          </div>
        })}
      </div>
    }
}
