//! Tracking links for application resources.

use crate::application::services::LinkFactory;
use crate::domain::entities::QueryValue;
use crate::domain::link_builder::LinkBuilder;

/// A resource that can produce its own tracking link.
///
/// Implementors provide a resource name and identifier; the path, reference
/// key and reference value derive from them and can be overridden.
///
/// # Examples
///
/// ```ignore
/// struct Booking { id: u32 }
///
/// impl Trackable for Booking {
///     fn resource_name(&self) -> String { "booking".into() }
///     fn resource_id(&self) -> QueryValue { self.id.into() }
/// }
///
/// // https://client.example.com/booking/42?ref_booking=42&utm_source=email&utm_medium=email
/// let url = booking.tracked_link(&factory, Some("email"), Vec::<(String, QueryValue)>::new());
/// ```
pub trait Trackable {
    /// Lowercase resource name, e.g. `booking`.
    fn resource_name(&self) -> String;

    /// Identifier used in the path and the reference parameter.
    fn resource_id(&self) -> QueryValue;

    /// Path of the resource, `<name>/<id>` by default.
    fn tracking_path(&self) -> String {
        format!("{}/{}", self.resource_name(), self.resource_id())
    }

    fn reference_key(&self) -> String {
        self.resource_name()
    }

    fn reference_value(&self) -> QueryValue {
        self.resource_id()
    }

    /// Builder on the factory's client URL.
    fn tracking_builder(&self, factory: &LinkFactory) -> LinkBuilder {
        factory.client()
    }

    /// Builds the resource link.
    ///
    /// Sets the path, applies `preset` when given, adds the reference
    /// parameter, then merges `extra`.
    fn tracked_link<I, K, V>(&self, factory: &LinkFactory, preset: Option<&str>, extra: I) -> String
    where
        Self: Sized,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<QueryValue>,
    {
        let mut builder = self
            .tracking_builder(factory)
            .set_path(self.tracking_path());

        if let Some(name) = preset.filter(|name| !name.is_empty()) {
            builder = builder.preset(name);
        }

        builder
            .reference(&self.reference_key(), self.reference_value())
            .params(extra)
            .build()
    }
}
