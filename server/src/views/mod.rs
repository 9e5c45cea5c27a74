mod current_player_view;
mod leaderboard_view;
