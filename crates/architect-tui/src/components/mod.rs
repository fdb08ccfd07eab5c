pub mod answer_list;
pub mod preference_panel;
pub mod transcript_view;
