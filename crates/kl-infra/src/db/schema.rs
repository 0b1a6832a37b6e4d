diesel::table! {
    t_daily_override (id) {
        id -> BigInt,
        day_key -> Text,
        word_id -> BigInt,
    }
}

diesel::table! {
    t_pass_level (id) {
        id -> BigInt,
        season -> Text,
        level -> Integer,
        xp_required -> BigInt,
        reward -> Nullable<Text>,
    }
}

diesel::table! {
    t_pass_progress (id) {
        id -> BigInt,
        user_id -> BigInt,
        season -> Text,
        current_level -> Integer,
        current_xp -> BigInt,
    }
}

diesel::table! {
    t_team (id) {
        id -> BigInt,
        code -> Text,
        name -> Text,
    }
}

diesel::table! {
    t_user (id) {
        id -> BigInt,
        email -> Text,
        password_hash -> Nullable<Text>,
        display_name -> Nullable<Text>,
        google_sub -> Nullable<Text>,
        team_id -> Nullable<BigInt>,
        is_active -> Bool,
        created_at -> BigInt,
    }
}

diesel::table! {
    t_word (id) {
        id -> BigInt,
        word -> Text,
        definition -> Text,
        meta -> Nullable<Text>,
    }
}

diesel::joinable!(t_daily_override -> t_word (word_id));
diesel::joinable!(t_user -> t_team (team_id));
diesel::joinable!(t_pass_progress -> t_user (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    t_daily_override,
    t_pass_level,
    t_pass_progress,
    t_team,
    t_user,
    t_word,
);
