//! Order book view.
//!
//! Mount runs the auth gate first and only then fetches, so a refused
//! session never sees order data. After a create or an execute the whole
//! collection is fetched again and the book replaced.

use std::sync::Arc;

use super::gate::{guard, Gate};
use super::{Route, ViewState};
use crate::client::AppContext;
use crate::domain::order::{OrderBook, OrderField, OrderForm, OrderId};

/// Called with the new value each time the loading flag changes.
pub type LoadingHook = Arc<dyn Fn(bool) + Send + Sync>;

pub struct OrderBookView {
    ctx: AppContext,
    book: OrderBook,
    loading: bool,
    on_loading: Option<LoadingHook>,
    form_open: bool,
    pub form: OrderForm,
    state: ViewState,
}

impl OrderBookView {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            book: OrderBook::new(),
            loading: false,
            on_loading: None,
            form_open: false,
            form: OrderForm::new(),
            state: ViewState::Idle,
        }
    }

    pub fn with_loading_hook(mut self, hook: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_loading = Some(Arc::new(hook));
        self
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// While set, the body shows a loading notice instead of the table.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn set_loading(&mut self, on: bool) {
        if self.loading == on {
            return;
        }
        self.loading = on;
        if let Some(hook) = &self.on_loading {
            hook(on);
        }
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub async fn mount(&mut self) -> Option<Route> {
        self.state = ViewState::Loading;
        self.set_loading(true);
        match guard(&self.ctx).await {
            Gate::Redirect(route) => {
                self.set_loading(false);
                self.book.clear();
                self.state = ViewState::Redirected(route);
                Some(route)
            }
            Gate::Pass(_) => {
                self.refresh().await;
                None
            }
        }
    }

    /// Fetch the collection and replace the book. On failure the previous
    /// rows stay.
    pub async fn refresh(&mut self) {
        self.set_loading(true);
        match self.ctx.orders().list().await {
            Ok(rows) => {
                self.book.replace(rows);
                self.state = ViewState::Ready;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching orders");
                let message = format!("Error fetching orders: {e}");
                self.ctx.reporter.error(&message);
                self.state = ViewState::Failed(message);
            }
        }
        self.set_loading(false);
    }

    pub fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
    }

    pub fn set_field(&mut self, field: OrderField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Validate and post the draft, then refresh. Returns whether the order
    /// was accepted by the backend. Nothing is sent while the form is closed.
    pub async fn place_order(&mut self) -> bool {
        if !self.form_open {
            return false;
        }
        let Some(order) = self.form.submit() else {
            return false;
        };

        self.set_loading(true);
        match self.ctx.orders().place(order).await {
            Ok(_) => {
                self.form.reset();
                self.form_open = false;
                self.refresh().await;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Error creating order");
                self.ctx.reporter.error(&format!("Error creating order: {e}"));
                self.set_loading(false);
                false
            }
        }
    }

    pub async fn execute(&mut self, id: &OrderId) -> bool {
        self.set_loading(true);
        match self.ctx.orders().execute(id).await {
            Ok(_) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, order_id = %id, "Error executing order");
                self.ctx.reporter.error(&format!("Error executing order: {e}"));
                self.set_loading(false);
                false
            }
        }
    }

    /// Forget the token and leave for the login view.
    pub async fn logout(&mut self) -> Route {
        if let Err(e) = self.ctx.auth().logout().await {
            tracing::warn!(error = %e, "Failed to clear session");
            self.ctx.reporter.warning(&e.to_string());
        }
        self.book.clear();
        self.state = ViewState::Redirected(Route::Login);
        Route::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::form::{INVALID_NUMBER_MESSAGE, REQUIRED_MESSAGE};
    use crate::domain::order::OrderType;
    use crate::report::Severity;
    use crate::session::SessionStore;
    use crate::testkit::{self, Call, Endpoint, Failure, FakeBackend};
    use std::sync::Mutex;

    async fn mounted(backend: FakeBackend) -> (OrderBookView, std::sync::Arc<FakeBackend>) {
        let (ctx, backend, session, _) = testkit::context(backend.with_valid_token("tok"));
        session.set("tok").await.unwrap();
        let mut view = OrderBookView::new(ctx);
        assert_eq!(view.mount().await, None);
        (view, backend)
    }

    #[tokio::test]
    async fn test_mount_without_token_redirects_before_fetch() {
        let backend = FakeBackend::new().with_order("a1", "BUY", 5.0, 10.0);
        let (ctx, backend, _, _) = testkit::context(backend);
        let mut view = OrderBookView::new(ctx);

        assert_eq!(view.mount().await, Some(Route::Login));
        assert!(backend.calls().is_empty());
        assert!(view.book().is_empty());
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_mount_with_refused_token_evicts_it() {
        let (ctx, backend, session, _) = testkit::context(FakeBackend::new());
        session.set("stale").await.unwrap();
        let mut view = OrderBookView::new(ctx);

        assert_eq!(view.mount().await, Some(Route::Login));
        assert_eq!(session.get().await, None);
        assert_eq!(backend.calls_to(Endpoint::ListOrders), 0);
    }

    #[tokio::test]
    async fn test_mount_loads_orders() {
        let backend = FakeBackend::new()
            .with_order("a1", "BUY", 5.0, 10.0)
            .with_order("a2", "SELL", 7.5, 1.0);
        let (view, _) = mounted(backend).await;

        assert_eq!(view.state(), &ViewState::Ready);
        assert_eq!(view.book().len(), 2);
        let second = view.book().get(&OrderId::new("a2")).unwrap();
        assert_eq!(second.order_type, OrderType::Sell);
    }

    #[tokio::test]
    async fn test_place_posts_numbers_and_refreshes() {
        let (mut view, backend) = mounted(FakeBackend::new()).await;
        view.toggle_form();
        view.set_field(OrderField::Type, "BUY");
        view.set_field(OrderField::Quantity, "10");
        view.set_field(OrderField::Price, "5");

        assert!(view.place_order().await);
        let created = backend
            .calls()
            .into_iter()
            .find_map(|c| match c {
                Call::CreateOrder { order, .. } => Some(order),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            serde_json::to_value(&created).unwrap(),
            serde_json::json!({"type": "BUY", "quantity": 10, "price": 5})
        );
        assert_eq!(backend.calls_to(Endpoint::ListOrders), 2);
        assert_eq!(view.book().len(), 1);
        assert!(!view.is_form_open());
        assert_eq!(view.form, OrderForm::new());
    }

    #[tokio::test]
    async fn test_invalid_draft_never_posts() {
        let (mut view, backend) = mounted(FakeBackend::new()).await;
        view.toggle_form();
        view.set_field(OrderField::Type, "BUY");
        view.set_field(OrderField::Quantity, "abc");
        view.set_field(OrderField::Price, "5");

        assert!(!view.place_order().await);
        assert_eq!(view.form.error(OrderField::Quantity), Some(INVALID_NUMBER_MESSAGE));
        assert_eq!(backend.calls_to(Endpoint::CreateOrder), 0);
    }

    #[tokio::test]
    async fn test_missing_field_flagged_on_submit() {
        let (mut view, backend) = mounted(FakeBackend::new()).await;
        view.toggle_form();
        view.set_field(OrderField::Type, "SELL");

        assert!(!view.place_order().await);
        assert_eq!(view.form.error(OrderField::Quantity), Some(REQUIRED_MESSAGE));
        assert_eq!(view.form.error(OrderField::Price), None);
        assert_eq!(backend.calls_to(Endpoint::CreateOrder), 0);
    }

    #[tokio::test]
    async fn test_closed_form_never_posts() {
        let (mut view, backend) = mounted(FakeBackend::new()).await;
        view.set_field(OrderField::Type, "BUY");
        view.set_field(OrderField::Quantity, "10");
        view.set_field(OrderField::Price, "5");

        assert!(!view.is_form_open());
        assert!(!view.place_order().await);
        assert_eq!(backend.calls_to(Endpoint::CreateOrder), 0);
        assert_eq!(view.form.error(OrderField::Quantity), None);

        view.toggle_form();
        assert!(view.place_order().await);
        assert_eq!(backend.calls_to(Endpoint::CreateOrder), 1);
    }

    #[tokio::test]
    async fn test_loading_raised_around_fetch_and_writes() {
        let backend = FakeBackend::new()
            .with_valid_token("tok")
            .with_order("abc", "SELL", 2.0, 3.0);
        let (ctx, _, session, _) = testkit::context(backend);
        session.set("tok").await.unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut view =
            OrderBookView::new(ctx).with_loading_hook(move |on| sink.lock().unwrap().push(on));

        view.mount().await;
        assert_eq!(*seen.lock().unwrap(), [true, false]);

        view.toggle_form();
        view.set_field(OrderField::Type, "BUY");
        view.set_field(OrderField::Quantity, "1");
        view.set_field(OrderField::Price, "1");
        assert!(view.place_order().await);
        assert!(view.execute(&OrderId::new("abc")).await);

        assert_eq!(*seen.lock().unwrap(), [true, false, true, false, true, false]);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_failed_write_lowers_loading() {
        let backend = FakeBackend::new().with_valid_token("tok");
        backend.fail(Endpoint::ExecuteOrder, Failure::Status(500));
        let (ctx, _, session, _) = testkit::context(backend);
        session.set("tok").await.unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut view =
            OrderBookView::new(ctx).with_loading_hook(move |on| sink.lock().unwrap().push(on));
        view.mount().await;

        assert!(!view.execute(&OrderId::new("abc")).await);
        assert_eq!(*seen.lock().unwrap(), [true, false, true, false]);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_execute_posts_id_and_refreshes() {
        let backend = FakeBackend::new().with_order("abc", "SELL", 2.0, 3.0);
        let (mut view, backend) = mounted(backend).await;

        assert!(view.execute(&OrderId::new("abc")).await);
        assert!(backend.calls().contains(&Call::ExecuteOrder {
            token: "tok".into(),
            order_id: "abc".into(),
        }));
        assert!(view.book().is_empty());
    }

    #[tokio::test]
    async fn test_failed_execute_is_reported_and_stays() {
        let backend = FakeBackend::new().with_order("abc", "SELL", 2.0, 3.0);
        let backend = backend.with_valid_token("tok");
        backend.fail(Endpoint::ExecuteOrder, Failure::Status(500));
        let (ctx, backend, session, reporter) = testkit::context(backend);
        session.set("tok").await.unwrap();
        let mut view = OrderBookView::new(ctx);
        view.mount().await;

        assert!(!view.execute(&OrderId::new("abc")).await);
        assert_eq!(reporter.messages(Severity::Error).len(), 1);
        assert_eq!(view.book().len(), 1);
        assert_eq!(backend.calls_to(Endpoint::ListOrders), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_view() {
        let backend = FakeBackend::new().with_valid_token("tok");
        backend.fail(Endpoint::ListOrders, Failure::Status(503));
        let (ctx, _, session, reporter) = testkit::context(backend);
        session.set("tok").await.unwrap();
        let mut view = OrderBookView::new(ctx);

        assert_eq!(view.mount().await, None);
        assert!(matches!(view.state(), ViewState::Failed(_)));
        assert!(!view.is_loading());
        assert_eq!(reporter.messages(Severity::Error).len(), 1);
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let backend = FakeBackend::new().with_valid_token("tok");
        let (ctx, _, session, _) = testkit::context(backend);
        session.set("tok").await.unwrap();
        let mut view = OrderBookView::new(ctx);
        view.mount().await;

        assert_eq!(view.logout().await, Route::Login);
        assert_eq!(session.get().await, None);
    }
}
