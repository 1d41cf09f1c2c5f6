mod update_profile;
