//! Diesel table definitions mirroring `backend/migrations`.
//!
//! Keep in sync with the migration SQL; regenerate with
//! `diesel print-schema` after adding a migration.

diesel::table! {
    /// Registered user accounts.
    users (id) {
        id -> Int8,
        name -> Text,
        /// Unique across users.
        email -> Text,
        /// bcrypt digest, or plaintext for rows created before hashing.
        password -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Admin accounts, provisioned out of band.
    admins (id) {
        id -> Int8,
        username -> Text,
        email -> Text,
        password -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Ambulance bookings. `user_id` is null for anonymous bookings.
    bookings (id) {
        id -> Int8,
        user_id -> Nullable<Int8>,
        patient_name -> Text,
        phone -> Text,
        pickup_location -> Text,
        drop_location -> Text,
        emergency_type -> Text,
        notes -> Text,
        /// One of `pending`, `dispatched`, `completed`, `cancelled`.
        status -> Text,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, admins, bookings);
