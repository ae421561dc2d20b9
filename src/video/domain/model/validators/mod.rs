pub mod video_rules;
