mod commit_twice_without_changes_is_a_no_op;
mod commit_with_nothing_tracked;
mod commit_without_message;
