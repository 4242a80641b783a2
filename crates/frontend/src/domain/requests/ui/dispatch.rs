use contracts::domain::requests::{sort_for_dispatch, EquipmentRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::row::RequestRow;
use crate::domain::requests::api;
use crate::shared::api_utils::require_token;
use crate::shared::fetch_guard::{use_fetch_guard, FetchGuard};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::use_session;

/// Approved requests for the store manager, undispatched first. The outcome
/// of each dispatch (including backorders) is shown in a dialog.
#[component]
pub fn ApprovedRequests() -> impl IntoView {
    let session = use_session();
    let guard = use_fetch_guard();
    let actions = use_fetch_guard();
    let requests = RwSignal::new(Vec::<EquipmentRequest>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let dispatching = RwSignal::new(None::<String>);
    let outcome = RwSignal::new(String::new());
    let outcome_open = RwSignal::new(false);

    Effect::new(move |_| {
        let token = match require_token(session.token()) {
            Ok(token) => token,
            Err(e) => {
                set_error.set(Some(e));
                set_loading.set(false);
                return;
            }
        };
        let ticket = guard.with_value(FetchGuard::next_ticket);
        spawn_local(async move {
            let result = api::fetch_approved(&token).await;
            ticket.apply(|| {
                match result {
                    Ok(mut list) => {
                        sort_for_dispatch(&mut list);
                        requests.set(list);
                    }
                    Err(e) => {
                        requests.set(Vec::new());
                        set_error.set(Some(e));
                    }
                }
                set_loading.set(false);
            });
        });
    });

    let dispatch = move |id: String| {
        let token = match require_token(session.token()) {
            Ok(token) => token,
            Err(e) => {
                outcome.set(e);
                outcome_open.set(true);
                return;
            }
        };
        dispatching.set(Some(id.clone()));
        let ticket = actions.with_value(FetchGuard::ticket);
        spawn_local(async move {
            let result = api::dispatch_request(&token, &id).await;
            ticket.apply(|| {
                match result {
                    Ok(response) => {
                        leptos::logging::log!(
                            "dispatched {}: {} line(s), {} backordered",
                            id,
                            response.dispatched.len(),
                            response.backordered.len()
                        );
                        outcome.set(response.summary());
                        requests.update(|list| list.retain(|r| r.id != id));
                    }
                    Err(message) => outcome.set(message),
                }
                outcome_open.set(true);
                dispatching.set(None);
            });
        });
    };

    view! {
        <PageFrame page_id="approved--list" category=PAGE_CAT_LIST>
            <h2 class="page__title">"Approved Requests from HOD"</h2>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading"><Spinner />" Loading approved requests..."</div> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Requester"</TableHeaderCell>
                            <TableHeaderCell>"Items"</TableHeaderCell>
                            <TableHeaderCell>"Date"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || requests.get()
                            key=|r| r.id.clone()
                            children=move |req: EquipmentRequest| {
                                let id = req.id.clone();
                                let busy = {
                                    let id = id.clone();
                                    move || dispatching.with(|d| d.as_deref() == Some(id.as_str()))
                                };
                                let RequestRow { account, lines, created, dispatched, .. } = RequestRow::new(&req);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{account}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <ul class="request-lines">
                                                {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                                            </ul>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{created}</TableCellLayout></TableCell>
                                        <TableCell>
                                            {if dispatched {
                                                view! { <span class="badge badge--success">{icon("check")}" Dispatched"</span> }.into_any()
                                            } else {
                                                let busy_label = busy.clone();
                                                view! {
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Primary
                                                        disabled=Signal::derive(busy)
                                                        on_click=move |_| dispatch(id.clone())
                                                    >
                                                        {move || if busy_label() { view! { <Spinner size=SpinnerSize::Tiny /> }.into_any() } else { view! { {icon("truck")}" Dispatch" }.into_any() }}
                                                    </Button>
                                                }.into_any()
                                            }}
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
                <Show when=move || requests.with(|r| r.is_empty())>
                    <div class="empty-state">"No approved requests found."</div>
                </Show>
            </Show>

            <Dialog open=outcome_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Dispatch"</DialogTitle>
                        <DialogContent>
                            <pre class="dispatch-summary">{move || outcome.get()}</pre>
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| outcome_open.set(false)>
                                "OK"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
