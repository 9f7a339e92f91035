//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int4,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional task description.
        description -> Nullable<Text>,
        /// Completion flag, defaults to false at insertion.
        is_completed -> Bool,
        /// Store-assigned creation timestamp.
        created_at -> Timestamptz,
    }
}
