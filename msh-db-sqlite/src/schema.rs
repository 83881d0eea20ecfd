table! {
    users (id) {
        id -> Text,
        email -> Text,
        password -> Text,
        role -> SmallInt,
        name -> Text,
        first_name -> Nullable<Text>,
        last_name -> Nullable<Text>,
        phone -> Nullable<Text>,
        gender -> Nullable<Text>,
        birth_date -> Nullable<Text>,
        job_title -> Nullable<Text>,
        city -> Nullable<Text>,
        favorite_sports -> Text,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Facilities
///////////////////////////////////////////////////////////////////////

table! {
    facilities (id) {
        id -> Text,
        name -> Text,
        description -> Text,
        street -> Nullable<Text>,
        commune -> Nullable<Text>,
        city -> Nullable<Text>,
        province -> Nullable<Text>,
        region -> Nullable<Text>,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        sports -> Text,
        equipment -> Text,
        facility_type -> Text,
        accessible -> Bool,
        establishment_condition -> Nullable<Text>,
        building_condition -> Nullable<Text>,
        equipment_condition -> Nullable<Text>,
        capacity -> Nullable<BigInt>,
        staff_count -> Nullable<BigInt>,
        surface_area -> Nullable<Double>,
        hourly_rate -> Nullable<Double>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    facility_requests (id) {
        id -> Text,
        name -> Text,
        description -> Text,
        street -> Nullable<Text>,
        commune -> Nullable<Text>,
        city -> Nullable<Text>,
        province -> Nullable<Text>,
        region -> Nullable<Text>,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        sports -> Text,
        equipment -> Text,
        facility_type -> Text,
        accessible -> Bool,
        establishment_condition -> Nullable<Text>,
        building_condition -> Nullable<Text>,
        equipment_condition -> Nullable<Text>,
        capacity -> Nullable<BigInt>,
        staff_count -> Nullable<BigInt>,
        surface_area -> Nullable<Double>,
        hourly_rate -> Nullable<Double>,
        requested_by -> Text,
        requester_email -> Text,
        status -> Text,
        rejection_reason -> Nullable<Text>,
        attachment_urls -> Text,
        facility_id -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(facility_requests -> users (requested_by));

///////////////////////////////////////////////////////////////////////
// Reservations
///////////////////////////////////////////////////////////////////////

table! {
    reservations (id) {
        id -> Text,
        user_id -> Text,
        user_email -> Text,
        facility_id -> Text,
        start_at -> BigInt,
        end_at -> BigInt,
        status -> Text,
        total_cost -> Double,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(reservations -> users (user_id));
joinable!(reservations -> facilities (facility_id));

///////////////////////////////////////////////////////////////////////
// Catalog & site
///////////////////////////////////////////////////////////////////////

table! {
    equipments (id) {
        id -> Text,
        name -> Text,
        description -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    settings (id) {
        id -> Text,
        site_name -> Text,
        site_description -> Text,
        logo_url -> Nullable<Text>,
        contact_email -> Nullable<Text>,
        contact_phone -> Nullable<Text>,
        contact_address -> Nullable<Text>,
        facebook -> Nullable<Text>,
        instagram -> Nullable<Text>,
        twitter -> Nullable<Text>,
        youtube -> Nullable<Text>,
        hero_title -> Text,
        hero_subtitle -> Text,
        footer_links -> Text,
        updated_at -> BigInt,
    }
}

allow_tables_to_appear_in_same_query!(
    users,
    facilities,
    facility_requests,
    reservations,
    equipments,
    settings,
);
