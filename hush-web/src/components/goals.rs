use super::icon::{Icon, IconKind};
use super::section::{CoverImage, DISPLAY_FONT};
use crate::hooks::{millis, ViewportObserver};
use gloo::timers::callback::Timeout;
use hush_content::{BusinessGoals, Milestone, GOALS_IMAGE_SRC};
use hush_core::roadmap::{clamp_stage, format_count, PopupAlign, DEFAULT_STAGE, DETAILS_DELAY, KEY_YEAR, REVEAL_THRESHOLD};
use hush_core::{RoadmapChart, Variant};
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

const SERIES_LABEL: &str = "Active Users";
const SERIES_STROKE: &str = "#3b82f6";

fn objective_icon(index: usize) -> IconKind {
    match index % 3 {
        0 => IconKind::Target,
        1 => IconKind::TrendingUp,
        _ => IconKind::ShieldCheck,
    }
}

fn popup_classes(align: PopupAlign) -> (&'static str, &'static str) {
    match align {
        PopupAlign::Left => ("left-4 origin-bottom-left", "left-5"),
        PopupAlign::Right => ("right-4 origin-bottom-right", "right-5"),
        PopupAlign::Center => ("left-1/2 -translate-x-1/2 origin-bottom", "left-1/2 -translate-x-1/2"),
    }
}

#[component]
fn MetricTile(icon: IconKind, label: &'static str, value: u32, #[prop(optional)] wide: bool) -> impl IntoView {
    let class = if wide {
        "col-span-2 flex items-center justify-between rounded-lg border border-white/5 bg-white/5 p-2.5 transition-colors hover:bg-white/10"
    } else {
        "rounded-lg border border-white/5 bg-white/5 p-2.5 transition-colors hover:bg-white/10"
    };
    view! {
      <div class=class>
        <div class="mb-1 flex items-center gap-1.5">
          <Icon kind=icon size=12 class="text-blue-400"/>
          <span class="text-[9px] font-semibold uppercase text-white/50">{label}</span>
        </div>
        <span class="block text-lg font-bold leading-none text-white">{format_count(value)}</span>
      </div>
    }
}

#[component]
fn MilestonePopup(index: usize, milestone: &'static Milestone, total: usize) -> impl IntoView {
    let key_year = milestone.year == KEY_YEAR;
    let (placement, arrow) = popup_classes(PopupAlign::for_index(index, total));
    let icon_tint = if key_year { "text-white" } else { "text-blue-200" };
    let card_border = if key_year { "border-blue-400/40 shadow-blue-500/20" } else { "border-white/10" };
    let badge = if key_year {
        "flex h-10 w-10 items-center justify-center rounded-full bg-blue-600 shadow-lg shadow-blue-500/30"
    } else {
        "flex h-10 w-10 items-center justify-center rounded-full border border-white/10 bg-white/10 shadow-lg"
    };

    view! {
      <div class=format!("absolute bottom-[20%] z-50 {placement}")>
        <div class=format!("relative w-[300px] overflow-hidden rounded-2xl border bg-[#0b172a]/95 p-5 shadow-[0_10px_40px_-10px_rgba(0,0,0,0.5)] backdrop-blur-xl {card_border}")>
          {key_year.then(|| view! {
            <div class="pointer-events-none absolute right-0 top-0 h-[150px] w-[150px] -translate-y-1/2 translate-x-1/2 rounded-full bg-blue-500/20 blur-[60px]"></div>
          })}
          <div class="relative mb-4 flex items-center gap-3 border-b border-white/10 pb-3">
            <div class=badge>
              <Icon kind=IconKind::for_milestone(index) class=icon_tint/>
            </div>
            <div>
              <h4 class="text-lg font-bold leading-tight text-white">{milestone.title}</h4>
              <p class="mt-0.5 text-[10px] font-medium uppercase tracking-wide text-white/50">{format!("{} Milestone", milestone.year)}</p>
            </div>
          </div>
          <div class="relative mb-4 grid grid-cols-2 gap-2">
            <MetricTile icon=IconKind::Users label="Users" value=milestone.active_users/>
            <MetricTile icon=IconKind::Hospital label="Hospitals" value=milestone.hospitals/>
            <MetricTile icon=IconKind::Heart label="Parents Helped" value=milestone.parents_helped wide=true/>
          </div>
          {(!milestone.parent_support.is_empty()).then(|| view! {
            <div class="relative flex items-start gap-2 border-t border-white/10 pt-3">
              <Icon kind=IconKind::Check size=14 class="mt-0.5 shrink-0 text-emerald-400"/>
              <p class="text-[10px] leading-tight text-white/60">
                <span class="font-medium text-blue-200/80">"Goal: "</span>
                {milestone.parent_support}
              </p>
            </div>
          })}
          <div class=format!("absolute -bottom-1.5 h-3 w-3 rotate-45 border-b border-r bg-[#0b172a] {card_border} {arrow}")></div>
        </div>
      </div>
    }
}

/// Adoption chart that draws itself once scrolled into view.
#[component]
fn TrajectoryChart(milestones: &'static [Milestone]) -> impl IntoView {
    let chart = RoadmapChart::build(milestones, |m| m.active_users);
    let line = chart.path();
    let area = chart.area_path();
    let points = chart.points.clone();
    let total = milestones.len();

    let revealed = create_rw_signal(false);
    let details = create_rw_signal(false);
    let active = create_rw_signal(clamp_stage(DEFAULT_STAGE, total));
    let hovered = create_rw_signal(None::<usize>);

    let observer = Rc::new(RefCell::new(None::<ViewportObserver>));
    let container = create_node_ref::<html::Div>();
    container.on_load({
        let observer = Rc::clone(&observer);
        move |el| {
            let handle = Rc::downgrade(&observer);
            let created = ViewportObserver::new("0px", &[REVEAL_THRESHOLD], move |entries| {
                if entries.iter().any(|entry| entry.is_intersecting()) {
                    revealed.set(true);
                    if let Some(handle) = handle.upgrade() {
                        if let Some(observer) = handle.borrow().as_ref() {
                            observer.disconnect();
                        }
                    }
                }
            });
            match created {
                Ok(created) => {
                    created.observe(&el);
                    *observer.borrow_mut() = Some(created);
                }
                Err(err) => {
                    tracing::warn!(?err, "chart observer unavailable, showing immediately");
                    revealed.set(true);
                }
            }
        }
    });

    let details_timer = Rc::new(RefCell::new(None::<Timeout>));
    create_effect({
        let details_timer = Rc::clone(&details_timer);
        move |_| {
            if revealed.get() && details_timer.borrow().is_none() {
                *details_timer.borrow_mut() = Some(Timeout::new(millis(DETAILS_DELAY), move || details.set(true)));
            }
        }
    });

    on_cleanup(move || {
        observer.borrow_mut().take();
        details_timer.borrow_mut().take();
    });

    let focus_x = {
        let points = points.clone();
        move || {
            let index = hovered.get().unwrap_or_else(|| active.get());
            points.get(index).map(|p| p.x)
        }
    };

    view! {
      <div class="relative hidden w-full overflow-visible rounded-2xl border border-white/15 bg-gradient-to-b from-blue-500/10 to-transparent p-4 pb-32 shadow-2xl backdrop-blur-xl md:block md:p-8">
        <div class="relative h-[450px] w-full select-none overflow-visible" node_ref=container>
          <div class="pointer-events-none absolute inset-0 z-0">
            {chart.guides.iter().map(|guide| view! {
              <div class="absolute flex w-full items-center" style=format!("top: {}%", guide.top)>
                <div class="w-full border-t border-dashed border-white/10"></div>
                <span class="absolute left-0 -translate-y-[140%] pl-1 text-[10px] font-medium text-white/30">{guide.label.clone()}</span>
              </div>
            }).collect_view()}
          </div>

          <svg viewBox="0 0 100 100" preserveAspectRatio="none" class="pointer-events-none absolute inset-0 z-10 h-full w-full overflow-visible">
            <defs>
              <clipPath id="chart-grow-clip">
                <rect
                  x="0"
                  y="0"
                  height="100%"
                  width=move || if revealed.get() { "100%" } else { "0%" }
                  style="transition: width 1400ms cubic-bezier(0.19, 1, 0.22, 1)"
                />
              </clipPath>
              <linearGradient id="chart-area-gradient" x1="0%" y1="0%" x2="0%" y2="100%">
                <stop offset="0%" stop-color=SERIES_STROKE stop-opacity="0.45"/>
                <stop offset="100%" stop-color=SERIES_STROKE stop-opacity="0.02"/>
              </linearGradient>
            </defs>
            <g clip-path="url(#chart-grow-clip)">
              <path d=area fill="url(#chart-area-gradient)" class="transition-all duration-500"/>
              <path d=line fill="none" stroke=SERIES_STROKE stroke-width="1.6" vector-effect="non-scaling-stroke" class="transition-all duration-500"/>
            </g>
            {move || focus_x().map(|x| view! {
              <line
                x1=x
                x2=x
                y1="0"
                y2="100"
                stroke="rgba(96,165,250,0.4)"
                stroke-width="1"
                stroke-dasharray="2,2"
                vector-effect="non-scaling-stroke"
                class="transition-all duration-300"
              />
            })}
          </svg>

          <div class="absolute inset-0 z-20">
            {points.into_iter().map(|point| {
              let index = point.index;
              let milestone = &milestones[index];
              let key_year = point.year == KEY_YEAR;
              let is_active = move || active.get() == index;
              let is_hovered = move || hovered.get() == Some(index);
              let dot = move || {
                let size = match (key_year, is_active() || is_hovered()) {
                  (true, true) => "h-4 w-4 ring-2 ring-blue-500/50 border-white bg-blue-500 shadow-[0_0_15px_rgba(59,130,246,0.6)]",
                  (false, true) => "h-3 w-3 ring-2 ring-blue-400/30 border-white bg-blue-500 shadow-[0_0_15px_rgba(59,130,246,0.6)]",
                  (true, false) => "h-4 w-4 animate-pulse border-white/80 bg-blue-500",
                  (false, false) => "h-2 w-2 border-transparent bg-blue-500/50",
                };
                format!("flex items-center justify-center rounded-full border transition-all duration-300 {size}")
              };
              let label = move || {
                if is_active() || key_year {
                  "absolute bottom-[-30px] -translate-x-1/2 rounded-md bg-blue-500/10 px-2 py-1 text-xs font-medium text-blue-300 transition-colors duration-200"
                } else {
                  "absolute bottom-[-30px] -translate-x-1/2 rounded-md px-2 py-1 text-xs font-medium text-white/40 transition-colors duration-200 hover:text-white/70"
                }
              };

              view! {
                <div
                  class=move || format!(
                    "group absolute transition-opacity delay-500 duration-700 {}",
                    if details.get() { "opacity-100" } else { "opacity-0" },
                  )
                  style=format!("left: {}%; top: 0; bottom: 0; width: 1px", point.x)
                >
                  {move || (details.get() && is_active()).then(|| view! {
                    <MilestonePopup index=index milestone=milestone total=total/>
                  })}
                  <button
                    class=label
                    on:click=move |_| active.set(index)
                    on:mouseenter=move |_| hovered.set(Some(index))
                    on:mouseleave=move |_| hovered.set(None)
                  >
                    {point.year}
                  </button>
                  <div
                    class="absolute flex -translate-x-1/2 -translate-y-1/2 items-center justify-center transition-all duration-300"
                    style=format!("top: {}%; left: 0", point.y)
                  >
                    <div class=dot>
                      {key_year.then(|| view! { <div class="h-1.5 w-1.5 rounded-full bg-white shadow-sm"></div> })}
                    </div>
                  </div>
                  <div
                    class="absolute -left-4 h-full w-8 cursor-pointer bg-transparent"
                    on:click=move |_| active.set(index)
                    on:mouseenter=move |_| hovered.set(Some(index))
                    on:mouseleave=move |_| hovered.set(None)
                  ></div>
                </div>
              }
            }).collect_view()}
          </div>
        </div>

        <div class="pointer-events-none absolute bottom-6 left-0 w-full text-center">
          <span class="text-[10px] font-semibold uppercase tracking-[0.2em] text-white/20">"Year"</span>
        </div>
      </div>

      <div class="mt-4 hidden rounded-3xl border border-white/10 bg-white/10 p-8 shadow-lg shadow-black/25 backdrop-blur-xl md:col-span-3 md:block">
        {move || {
          let index = active.get();
          milestones.get(index).map(|stage| view! {
            <div class="grid grid-cols-1 gap-8 lg:grid-cols-3">
              <div class="space-y-3 lg:col-span-1">
                <div class="mb-2 flex items-center gap-2">
                  <span class="rounded border border-blue-500/20 bg-blue-500/20 px-2 py-0.5 text-[10px] font-bold uppercase tracking-wider text-blue-300">
                    {format!("{} Milestone", stage.year)}
                  </span>
                </div>
                <h3 class="flex items-center gap-3 text-2xl font-bold text-white">{stage.title}</h3>
                <div class="mt-4 flex items-center gap-3 text-sm text-blue-200/60">
                  <Icon kind=IconKind::for_milestone(index) class="text-blue-400"/>
                  <span class="text-xs font-semibold uppercase tracking-wide">"Stage Focus"</span>
                </div>
              </div>
              <div class="flex flex-col justify-center lg:col-span-2">
                <p class="text-lg font-light leading-relaxed text-white/80">{stage.description}</p>
                {(!stage.parent_support.is_empty()).then(|| view! {
                  <div class="mt-4 flex items-start gap-3 rounded-xl border border-white/5 bg-white/5 p-4">
                    <div class="mt-1 rounded-full bg-blue-500/20 p-1.5">
                      <Icon kind=IconKind::ArrowRight size=12 class="text-blue-400"/>
                    </div>
                    <div>
                      <span class="mb-0.5 block text-xs font-bold uppercase tracking-wider text-blue-200/50">"Primary Objective"</span>
                      <span class="text-sm text-blue-100/90">{stage.parent_support}</span>
                    </div>
                  </div>
                })}
              </div>
            </div>
          })
        }}
      </div>
    }
}

/// Stacked milestone cards shown instead of the chart on narrow screens.
#[component]
fn MobileTimeline(milestones: &'static [Milestone]) -> impl IntoView {
    view! {
      <div class="mt-4 flex flex-col gap-6 md:col-span-3 md:hidden">
        {milestones.iter().enumerate().map(|(index, stage)| view! {
          <div class="rounded-2xl border border-white/10 bg-white/5 p-6 shadow-lg backdrop-blur-lg">
            <div class="mb-4 flex items-center gap-3">
              <div class="flex h-10 w-10 items-center justify-center rounded-full border border-blue-500/30 bg-blue-500/20">
                <Icon kind=IconKind::for_milestone(index) class="text-blue-300"/>
              </div>
              <div>
                <span class="text-xs font-bold uppercase tracking-wider text-blue-400">{stage.year}</span>
                <h3 class="text-xl font-bold text-white">{stage.title}</h3>
              </div>
            </div>
            <p class="mb-4 text-sm leading-relaxed text-white/80">{stage.description}</p>
            <div class="mb-4 grid grid-cols-2 gap-3">
              <MetricTile icon=IconKind::Users label="Users" value=stage.active_users/>
              <MetricTile icon=IconKind::Hospital label="Hospitals" value=stage.hospitals/>
            </div>
            {(!stage.parent_support.is_empty()).then(|| view! {
              <div class="flex items-start gap-2 border-t border-white/10 pt-3">
                <Icon kind=IconKind::Check size=16 class="mt-0.5 shrink-0 text-emerald-400"/>
                <p class="text-xs text-white/70">
                  <span class="font-medium text-blue-200/80">"Goal: "</span>
                  {stage.parent_support}
                </p>
              </div>
            })}
          </div>
        }).collect_view()}
      </div>
    }
}

#[component]
pub fn GoalsSection(
    goals: BusinessGoals,
    milestones: &'static [Milestone],
    #[prop(optional)] variant: Variant,
) -> impl IntoView {
    match variant {
        Variant::Bento => view! {
          <section id="goals" class="grid grid-cols-1 gap-4 md:grid-cols-3">
            <div class="flex flex-col items-center justify-center rounded-3xl border border-white/10 bg-white/10 p-8 text-center text-white shadow-lg shadow-black/25 backdrop-blur-xl md:col-span-3">
              <h2 class="mb-4 text-3xl font-bold" style=DISPLAY_FONT>{goals.title}</h2>
              <p class="max-w-2xl text-white/80">"Our mission is to transform neonatal care through technology."</p>
            </div>

            {goals.objectives.iter().enumerate().map(|(i, objective)| view! {
              <div class="flex flex-col gap-4 rounded-3xl border border-white/10 bg-white/5 p-6 shadow-md shadow-black/20 backdrop-blur-lg transition-colors hover:border-blue-300/30">
                <div class="flex h-10 w-10 items-center justify-center rounded-full border border-white/20 bg-white/10 text-blue-200">
                  <Icon kind=objective_icon(i)/>
                </div>
                <p class="font-medium text-white/85">{*objective}</p>
              </div>
            }).collect_view()}

            <div class="rounded-3xl border border-white/10 bg-white/[0.08] p-8 shadow-xl shadow-black/30 backdrop-blur-2xl md:col-span-3">
              <div class="flex flex-col gap-6">
                <div class="flex flex-wrap items-center justify-between gap-4">
                  <div>
                    <h3 class="mb-1 text-lg font-semibold text-white">"Growth Trajectory"</h3>
                    <p class="text-xs text-white/60">"Solving NICU challenges through scalable adoption"</p>
                  </div>
                  <div class="flex flex-wrap gap-3 text-[0.6rem] uppercase tracking-wider">
                    <span class="flex items-center gap-2 rounded-full border border-white/10 bg-white/5 px-3 py-1.5 backdrop-blur-sm">
                      <span class="inline-flex h-2 w-2 rounded-full" style=format!("background: {SERIES_STROKE}") aria-hidden="true"></span>
                      <span class="text-white/70">{SERIES_LABEL}</span>
                    </span>
                  </div>
                </div>
                <TrajectoryChart milestones=milestones/>
              </div>
              <MobileTimeline milestones=milestones/>
            </div>
          </section>
        }
        .into_view(),

        Variant::Centered => view! {
          <section id="goals" class="my-10 rounded-[3rem] bg-white/5 px-6 py-20">
            <div class="mx-auto mb-12 max-w-4xl text-center">
              <h2 class="mb-6 text-4xl font-bold text-white" style=DISPLAY_FONT>{goals.title}</h2>
              <div class="mx-auto h-1 w-20 rounded-full bg-blue-500"></div>
            </div>
            <div class="mx-auto grid max-w-3xl grid-cols-1 gap-6 md:grid-cols-2">
              {goals.objectives.iter().map(|objective| view! {
                <div class="flex items-start gap-4 rounded-xl p-4 transition-colors hover:bg-white/5">
                  <Icon kind=IconKind::Check class="mt-1 shrink-0 text-blue-400"/>
                  <span class="text-lg text-white/80">{*objective}</span>
                </div>
              }).collect_view()}
            </div>
          </section>
        }
        .into_view(),

        _ => view! {
          <section id="goals" class="rounded-[26px] bg-[#071a2d] px-10 py-12">
            <div class="flex flex-col gap-12 text-white lg:flex-row-reverse">
              <div class="space-y-6 lg:w-1/3">
                <div class="text-sm font-semibold uppercase tracking-wide text-blue-400">"Impact metrics"</div>
                <h2 class="text-3xl text-blue-100" style=DISPLAY_FONT>{goals.title}</h2>
                <div class="group relative aspect-square w-full overflow-hidden rounded-2xl border border-white/10 bg-white/5">
                  <CoverImage
                    src=GOALS_IMAGE_SRC
                    alt="Mother and Child"
                    class="opacity-70 transition-opacity duration-500 group-hover:opacity-90"
                  />
                  <div class="absolute inset-0 bg-gradient-to-b from-transparent to-[#071a2d]/90"></div>
                </div>
              </div>
              <ul class="space-y-3 text-base text-white/75 lg:w-2/3">
                {goals.objectives.iter().map(|objective| view! {
                  <li class="flex items-start gap-3 rounded-[18px] border border-[#15324f]/60 bg-[#0a2239] p-4">
                    <Icon kind=IconKind::Check class="mt-0.5 shrink-0 text-blue-400"/>
                    <span>{*objective}</span>
                  </li>
                }).collect_view()}
              </ul>
            </div>
          </section>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objectives_cycle_through_three_icons() {
        let icons: Vec<_> = (0..4).map(objective_icon).collect();
        assert_eq!(icons, [IconKind::Target, IconKind::TrendingUp, IconKind::ShieldCheck, IconKind::Target]);
    }

    #[test]
    fn edge_popups_point_back_into_the_chart() {
        assert_eq!(popup_classes(PopupAlign::Left).1, "left-5");
        assert_eq!(popup_classes(PopupAlign::Right).1, "right-5");
    }
}
