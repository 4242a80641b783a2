use contracts::domain::requests::EquipmentRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::row::RequestRow;
use crate::domain::requests::api;
use crate::shared::api_utils::require_token;
use crate::shared::fetch_guard::{use_fetch_guard, FetchGuard};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::use_session;

/// Requests raised by lecturers and (S)ARAs.
pub fn staff_only(requests: Vec<EquipmentRequest>) -> Vec<EquipmentRequest> {
    requests.into_iter().filter(|r| r.is_from_staff()).collect()
}

/// Store-manager view of pending requests submitted by staff.
#[component]
pub fn StaffRequests() -> impl IntoView {
    let session = use_session();
    let guard = use_fetch_guard();
    let requests = RwSignal::new(Vec::<EquipmentRequest>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

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
            let result = api::fetch_pending(&token).await;
            ticket.apply(|| {
                match result {
                    Ok(list) => requests.set(staff_only(list)),
                    Err(e) => set_error.set(Some(e)),
                }
                set_loading.set(false);
            });
        });
    });

    view! {
        <PageFrame page_id="ara--list" category=PAGE_CAT_LIST>
            <h2 class="page__title">"Requests from ARA/Lecturers"</h2>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Requester"</TableHeaderCell>
                            <TableHeaderCell>"Role"</TableHeaderCell>
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
                                let row = RequestRow::new(&req);
                                let (status, badge) = row.status();
                                let RequestRow { requester, requester_role, lines, created, .. } = row;
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{requester}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{requester_role}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <ul class="request-lines">
                                                {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                                            </ul>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{created}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <span class=badge>{status}</span>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
                <Show when=move || requests.with(|r| r.is_empty())>
                    <div class="empty-state">"No staff requests found."</div>
                </Show>
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_requests_are_filtered_out() {
        let list: Vec<EquipmentRequest> = serde_json::from_value(serde_json::json!([
            {"_id": "1", "requestedBy": {"username": "s", "role": "Student"}},
            {"_id": "2", "requestedBy": {"username": "l", "role": "Lecturer"}},
            {"_id": "3"},
            {"_id": "4", "requestedBy": {"name": "Abebe", "role": "ARA"}}
        ]))
        .unwrap();
        let ids: Vec<_> = staff_only(list).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["2", "4"]);
    }
}
