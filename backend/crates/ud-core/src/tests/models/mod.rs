mod user_changes;
