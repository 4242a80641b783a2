use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__column">
                <div class="footer__heading">"ECE Store"</div>
                <p>"Components, equipment and maintenance for the Electrical and Computer Engineering department."</p>
            </div>
            <div class="footer__column">
                <div class="footer__heading">"Contact"</div>
                <p>"Email: ece@astu.edu.et"</p>
            </div>
            <div class="footer__copyright">
                {format!("© {} ASTU ECE Department", year)}
            </div>
        </footer>
    }
}
