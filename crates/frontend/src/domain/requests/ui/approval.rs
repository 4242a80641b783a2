use contracts::domain::requests::EquipmentRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::row::RequestRow;
use crate::domain::requests::api;
use crate::shared::api_utils::require_token;
use crate::shared::date_utils::format_date;
use crate::shared::fetch_guard::{use_fetch_guard, FetchGuard};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::use_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Approve,
    Reject,
}

impl Decision {
    fn past_tense(self) -> &'static str {
        match self {
            Decision::Approve => "approved",
            Decision::Reject => "rejected",
        }
    }
}

/// Pending requests for the department head: list, details, approve/reject.
/// A decided request leaves the list.
#[component]
pub fn RequestApproval() -> impl IntoView {
    let session = use_session();
    let guard = use_fetch_guard();
    let actions = use_fetch_guard();
    let requests = RwSignal::new(Vec::<EquipmentRequest>::new());
    let selected = RwSignal::new(None::<EquipmentRequest>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (deciding, set_deciding) = signal(false);

    let load = move || {
        let token = match require_token(session.token()) {
            Ok(token) => token,
            Err(e) => {
                set_error.set(Some(e));
                set_loading.set(false);
                return;
            }
        };
        let ticket = guard.with_value(FetchGuard::next_ticket);
        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_pending(&token).await;
            ticket.apply(|| {
                match result {
                    Ok(list) => {
                        set_error.set(None);
                        requests.set(list);
                    }
                    Err(e) => set_error.set(Some(e)),
                }
                set_loading.set(false);
            });
        });
    };

    Effect::new(move |_| load());

    let decide = move |id: String, decision: Decision| {
        let token = match require_token(session.token()) {
            Ok(token) => token,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        set_deciding.set(true);
        let ticket = actions.with_value(FetchGuard::ticket);
        spawn_local(async move {
            let result = match decision {
                Decision::Approve => api::approve_request(&token, &id).await,
                Decision::Reject => api::reject_request(&token, &id).await,
            };
            ticket.apply(|| {
                match result {
                    Ok(()) => {
                        leptos::logging::log!("request {} {}", id, decision.past_tense());
                        requests.update(|list| list.retain(|r| r.id != id));
                        selected.set(None);
                    }
                    Err(e) => set_error.set(Some(e)),
                }
                set_deciding.set(false);
            });
        });
    };

    view! {
        <PageFrame page_id="requests--list" category=PAGE_CAT_LIST>
            <h2 class="page__title">"Department Head - Student Requests"</h2>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || match selected.get() {
                None => view! {
                    <div>
                        <div class="page__toolbar">
                            <h3>"Pending Requests"</h3>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                                {icon("refresh")}" Refresh"
                            </Button>
                        </div>
                        <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Student"</TableHeaderCell>
                                        <TableHeaderCell>"Course"</TableHeaderCell>
                                        <TableHeaderCell>"Pickup Date"</TableHeaderCell>
                                        <TableHeaderCell>"Status"</TableHeaderCell>
                                        <TableHeaderCell>"Action"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || requests.get()
                                        key=|r| r.id.clone()
                                        children=move |req: EquipmentRequest| {
                                            let row = RequestRow::new(&req);
                                            let (status, badge) = row.status();
                                            let RequestRow { requester, student_id, course, instructor, pickup, approved, .. } = row;
                                            let for_view = req;
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <div class="cell-primary">{requester}</div>
                                                            <div class="cell-secondary">{student_id}</div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <div>{course}</div>
                                                            <div class="cell-secondary">{instructor}</div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell><TableCellLayout>{pickup}</TableCellLayout></TableCell>
                                                    <TableCell>
                                                        <span class=badge>{status}</span>
                                                    </TableCell>
                                                    <TableCell>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Primary
                                                            disabled=approved
                                                            on_click=move |_| selected.set(Some(for_view.clone()))
                                                        >
                                                            "View"
                                                        </Button>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }
                                    />
                                </TableBody>
                            </Table>
                            <Show when=move || requests.with(|r| r.is_empty())>
                                <div class="empty-state">"No requests found."</div>
                            </Show>
                        </Show>
                    </div>
                }.into_any(),
                Some(req) => {
                    let id_approve = req.id.clone();
                    let id_reject = req.id.clone();
                    view! {
                        <div class="request-details">
                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| selected.set(None)>
                                {icon("chevron-left")}" Back to Requests"
                            </Button>
                            <h3>"Request Details"</h3>
                            <dl class="request-details__fields">
                                <dt>"Student:"</dt>
                                <dd>{format!("{} ({})", req.requester_name(), req.student_id.clone().unwrap_or_default())}</dd>
                                <dt>"Department:"</dt>
                                <dd>{req.department.clone().unwrap_or_default()}</dd>
                                <dt>"Course:"</dt>
                                <dd>{req.course()}</dd>
                                <dt>"Instructor:"</dt>
                                <dd>{req.instructor.clone().unwrap_or_default()}</dd>
                                <dt>"Pickup Date:"</dt>
                                <dd>{req.pickup_date.as_deref().map(format_date).unwrap_or_default()}</dd>
                                <dt>"Reason:"</dt>
                                <dd>{req.reason.clone().unwrap_or_default()}</dd>
                            </dl>
                            <strong>"Components:"</strong>
                            <ul>
                                {req.components.iter().map(|c| view! {
                                    <li>{format!("{} - Qty: {}", c.label(), c.quantity)}</li>
                                }).collect_view()}
                            </ul>
                            {if req.approved {
                                view! { <div class="request-details__approved">"This request has been approved."</div> }.into_any()
                            } else {
                                view! {
                                    <div class="request-details__actions">
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            disabled=deciding
                                            on_click=move |_| decide(id_approve.clone(), Decision::Approve)
                                        >
                                            {icon("check")}" Approve"
                                        </Button>
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            disabled=deciding
                                            on_click=move |_| decide(id_reject.clone(), Decision::Reject)
                                        >
                                            {icon("x")}" Reject"
                                        </Button>
                                    </div>
                                }.into_any()
                            }}
                        </div>
                    }.into_any()
                }
            }}
        </PageFrame>
    }
}
