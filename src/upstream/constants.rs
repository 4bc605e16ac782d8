// production upstream host used for the static center listing
pub const BASE_URL: &str = "https://002-iz.impfterminservice.de/";

// per-center shard hosts, numeric id templated in
pub const SHARD_HOST: &str = "https://00{0}-iz.impfterminservice.de/";

// relative resource paths below every endpoint host
pub const CENTER_LIST_PATH: &str = "assets/static/impfzentren.json";
pub const CAPACITY_CHECK_PATH: &str =
    "rest/suche/termincheck?plz={0}&leistungsmerkmale=L920,L921,L922,L923";
