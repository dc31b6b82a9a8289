use crate::domain::money::Price;
use crate::domain::reservation::{Reservation, ReservationForm, ReservationId, ReservationKind};
use crate::error::Result;
use parking_lot::RwLock;
use tracing::{debug, info};

#[derive(Debug)]
struct Registry {
    reservations: Vec<Reservation>,
    next_sequence: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            reservations: Vec::new(),
            next_sequence: 1,
        }
    }
}

/// Creates reservations and keeps the registry of active ones.
///
/// Each instance owns its own registry and ID sequence, so independent systems never
/// share IDs or state. Mutations hold a single write lock over both the registry and
/// the sequence counter; reads take the shared lock.
#[derive(Debug, Default)]
pub struct BookingSystem {
    registry: RwLock<Registry>,
}

impl BookingSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Books a reservation of the type named by `type_tag`.
    ///
    /// `type_tag` must be one of `"Hotel"`, `"Flight"` or `"CarRental"`; anything else
    /// fails with `InvalidArgument`, as does a form missing a field the type needs.
    /// A rejected request does not consume an ID. The returned value is a snapshot;
    /// the registry keeps the authoritative copy.
    pub fn create_reservation(&self, type_tag: &str, form: ReservationForm) -> Result<Reservation> {
        let kind: ReservationKind = type_tag.parse()?;

        let mut registry = self.registry.write();
        let id = ReservationId::new(registry.next_sequence);
        let reservation = Reservation::new(id, kind, form)?;
        registry.next_sequence += 1;
        registry.reservations.push(reservation.clone());

        info!(%id, %kind, customer = reservation.customer_name(), "reservation created");
        Ok(reservation)
    }

    /// Removes the reservation with `id`. Returns `false` if no such reservation is active.
    pub fn cancel_reservation(&self, id: &str) -> bool {
        let Ok(id) = id.parse::<ReservationId>() else {
            debug!(id, "cancel requested for malformed reservation id");
            return false;
        };

        let mut registry = self.registry.write();
        match registry.reservations.iter().position(|r| r.id() == id) {
            Some(index) => {
                registry.reservations.remove(index);
                info!(%id, "reservation cancelled");
                true
            }
            None => {
                debug!(%id, "cancel requested for unknown reservation");
                false
            }
        }
    }

    /// Sum of the current price of every active reservation.
    pub fn total_booking_value(&self) -> Price {
        self.registry
            .read()
            .reservations
            .iter()
            .map(Reservation::calculate_price)
            .sum()
    }

    pub fn get(&self, id: &str) -> Option<Reservation> {
        let id = id.parse::<ReservationId>().ok()?;
        self.registry
            .read()
            .reservations
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    /// Active reservations in the order they were created.
    pub fn reservations(&self) -> Vec<Reservation> {
        self.registry.read().reservations.clone()
    }

    pub fn len(&self) -> usize {
        self.registry.read().reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.read().reservations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TripError;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, d).unwrap()
    }

    fn hotel_form() -> ReservationForm {
        ReservationForm::new("Ivan Ivanov", date(1), date(7))
            .room_type("Deluxe")
            .meal_plan("All Inclusive")
    }

    fn flight_form() -> ReservationForm {
        ReservationForm::new("Ivan Ivanov", date(1), date(1)).route("SVO", "IST")
    }

    fn car_form() -> ReservationForm {
        ReservationForm::new("Ivan Ivanov", date(1), date(5))
            .car_type("SUV")
            .insurance_included(true)
    }

    #[test]
    fn test_sequential_ids() {
        let system = BookingSystem::new();
        let ids: Vec<String> = [
            ("Hotel", hotel_form()),
            ("Flight", flight_form()),
            ("CarRental", car_form()),
        ]
        .into_iter()
        .map(|(tag, form)| system.create_reservation(tag, form).unwrap().id().to_string())
        .collect();

        assert_eq!(ids, ["RES-1", "RES-2", "RES-3"]);
    }

    #[test]
    fn test_unknown_type_tag() {
        let system = BookingSystem::new();
        let result = system.create_reservation("Boat", flight_form());

        assert!(matches!(result, Err(TripError::InvalidArgument(_))));
        assert!(system.is_empty());
    }

    #[test]
    fn test_rejected_form_does_not_consume_an_id() {
        let system = BookingSystem::new();
        let bad = ReservationForm::new("Ivan Ivanov", date(1), date(2));
        assert!(system.create_reservation("Hotel", bad).is_err());

        let created = system.create_reservation("Flight", flight_form()).unwrap();
        assert_eq!(created.id().to_string(), "RES-1");
    }

    #[test]
    fn test_cancel_and_total() {
        let system = BookingSystem::new();
        let hotel = system.create_reservation("Hotel", hotel_form()).unwrap();
        let flight = system.create_reservation("Flight", flight_form()).unwrap();
        let car = system.create_reservation("CarRental", car_form()).unwrap();

        assert_eq!(system.total_booking_value(), Price::new(dec!(1128)));

        assert!(system.cancel_reservation(&flight.id().to_string()));
        assert_eq!(
            system.total_booking_value(),
            hotel.calculate_price() + car.calculate_price()
        );
        assert!(!system.cancel_reservation(&flight.id().to_string()));
        assert_eq!(system.len(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_cancel() {
        let system = BookingSystem::new();
        system.create_reservation("Flight", flight_form()).unwrap();
        let second = system.create_reservation("Flight", flight_form()).unwrap();
        assert!(system.cancel_reservation(&second.id().to_string()));

        let third = system.create_reservation("Flight", flight_form()).unwrap();
        assert_eq!(third.id().to_string(), "RES-3");
    }

    #[test]
    fn test_cancel_unknown_or_malformed_id() {
        let system = BookingSystem::new();
        system.create_reservation("Flight", flight_form()).unwrap();

        assert!(!system.cancel_reservation("RES-99"));
        assert!(!system.cancel_reservation("nonsense"));
        assert_eq!(system.len(), 1);
    }

    #[test]
    fn test_listing_keeps_insertion_order() {
        let system = BookingSystem::new();
        system.create_reservation("CarRental", car_form()).unwrap();
        system.create_reservation("Hotel", hotel_form()).unwrap();
        system.create_reservation("Flight", flight_form()).unwrap();
        system.cancel_reservation("RES-2");

        let kinds: Vec<ReservationKind> =
            system.reservations().iter().map(Reservation::kind).collect();
        assert_eq!(kinds, [ReservationKind::CarRental, ReservationKind::Flight]);
    }

    #[test]
    fn test_get_returns_snapshot() {
        let system = BookingSystem::new();
        let created = system.create_reservation("Hotel", hotel_form()).unwrap();

        assert_eq!(system.get("RES-1"), Some(created));
        assert_eq!(system.get("RES-2"), None);
    }

    #[test]
    fn test_empty_system_total_is_zero() {
        assert_eq!(BookingSystem::new().total_booking_value(), Price::ZERO);
    }

    #[test]
    fn test_independent_systems() {
        let a = BookingSystem::new();
        let b = BookingSystem::new();
        a.create_reservation("Flight", flight_form()).unwrap();
        a.create_reservation("Flight", flight_form()).unwrap();

        let first_in_b = b.create_reservation("Flight", flight_form()).unwrap();
        assert_eq!(first_in_b.id().to_string(), "RES-1");
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 1);
    }
}
