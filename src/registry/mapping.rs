//! The built-in friendly zone names.

/// Friendly name, IANA identifier and standard offset in seconds, ordered by
/// offset and then by name.
pub(crate) const MAPPING: &[(&str, &str, i32)] = &[
    ("International Date Line West", "Etc/GMT+12", -43200),
    ("American Samoa", "Pacific/Pago_Pago", -39600),
    ("Midway Island", "Pacific/Midway", -39600),
    ("Hawaii", "Pacific/Honolulu", -36000),
    ("Alaska", "America/Juneau", -32400),
    ("Pacific Time (US & Canada)", "America/Los_Angeles", -28800),
    ("Tijuana", "America/Tijuana", -28800),
    ("Arizona", "America/Phoenix", -25200),
    ("Mazatlan", "America/Mazatlan", -25200),
    ("Mountain Time (US & Canada)", "America/Denver", -25200),
    ("Central America", "America/Guatemala", -21600),
    ("Central Time (US & Canada)", "America/Chicago", -21600),
    ("Chihuahua", "America/Chihuahua", -21600),
    ("Guadalajara", "America/Mexico_City", -21600),
    ("Mexico City", "America/Mexico_City", -21600),
    ("Monterrey", "America/Monterrey", -21600),
    ("Saskatchewan", "America/Regina", -21600),
    ("Bogota", "America/Bogota", -18000),
    ("Eastern Time (US & Canada)", "America/New_York", -18000),
    ("Indiana (East)", "America/Indiana/Indianapolis", -18000),
    ("Lima", "America/Lima", -18000),
    ("Quito", "America/Lima", -18000),
    ("Atlantic Time (Canada)", "America/Halifax", -14400),
    ("Caracas", "America/Caracas", -14400),
    ("Georgetown", "America/Guyana", -14400),
    ("La Paz", "America/La_Paz", -14400),
    ("Puerto Rico", "America/Puerto_Rico", -14400),
    ("Santiago", "America/Santiago", -14400),
    ("Newfoundland", "America/St_Johns", -12600),
    ("Brasilia", "America/Sao_Paulo", -10800),
    ("Buenos Aires", "America/Argentina/Buenos_Aires", -10800),
    ("Montevideo", "America/Montevideo", -10800),
    ("Greenland", "America/Nuuk", -7200),
    ("Mid-Atlantic", "Atlantic/South_Georgia", -7200),
    ("Azores", "Atlantic/Azores", -3600),
    ("Cape Verde Is.", "Atlantic/Cape_Verde", -3600),
    ("Dublin", "Europe/Dublin", 0),
    ("Edinburgh", "Europe/London", 0),
    ("Lisbon", "Europe/Lisbon", 0),
    ("London", "Europe/London", 0),
    ("Monrovia", "Africa/Monrovia", 0),
    ("UTC", "Etc/UTC", 0),
    ("Amsterdam", "Europe/Amsterdam", 3600),
    ("Belgrade", "Europe/Belgrade", 3600),
    ("Berlin", "Europe/Berlin", 3600),
    ("Bern", "Europe/Zurich", 3600),
    ("Bratislava", "Europe/Bratislava", 3600),
    ("Brussels", "Europe/Brussels", 3600),
    ("Budapest", "Europe/Budapest", 3600),
    ("Casablanca", "Africa/Casablanca", 3600),
    ("Copenhagen", "Europe/Copenhagen", 3600),
    ("Ljubljana", "Europe/Ljubljana", 3600),
    ("Madrid", "Europe/Madrid", 3600),
    ("Paris", "Europe/Paris", 3600),
    ("Prague", "Europe/Prague", 3600),
    ("Rome", "Europe/Rome", 3600),
    ("Sarajevo", "Europe/Sarajevo", 3600),
    ("Skopje", "Europe/Skopje", 3600),
    ("Stockholm", "Europe/Stockholm", 3600),
    ("Vienna", "Europe/Vienna", 3600),
    ("Warsaw", "Europe/Warsaw", 3600),
    ("West Central Africa", "Africa/Algiers", 3600),
    ("Zagreb", "Europe/Zagreb", 3600),
    ("Zurich", "Europe/Zurich", 3600),
    ("Athens", "Europe/Athens", 7200),
    ("Bucharest", "Europe/Bucharest", 7200),
    ("Cairo", "Africa/Cairo", 7200),
    ("Harare", "Africa/Harare", 7200),
    ("Helsinki", "Europe/Helsinki", 7200),
    ("Jerusalem", "Asia/Jerusalem", 7200),
    ("Kaliningrad", "Europe/Kaliningrad", 7200),
    ("Kyiv", "Europe/Kyiv", 7200),
    ("Pretoria", "Africa/Johannesburg", 7200),
    ("Riga", "Europe/Riga", 7200),
    ("Sofia", "Europe/Sofia", 7200),
    ("Tallinn", "Europe/Tallinn", 7200),
    ("Vilnius", "Europe/Vilnius", 7200),
    ("Baghdad", "Asia/Baghdad", 10800),
    ("Istanbul", "Europe/Istanbul", 10800),
    ("Kuwait", "Asia/Kuwait", 10800),
    ("Minsk", "Europe/Minsk", 10800),
    ("Moscow", "Europe/Moscow", 10800),
    ("Nairobi", "Africa/Nairobi", 10800),
    ("Riyadh", "Asia/Riyadh", 10800),
    ("St. Petersburg", "Europe/Moscow", 10800),
    ("Volgograd", "Europe/Volgograd", 10800),
    ("Tehran", "Asia/Tehran", 12600),
    ("Abu Dhabi", "Asia/Muscat", 14400),
    ("Baku", "Asia/Baku", 14400),
    ("Muscat", "Asia/Muscat", 14400),
    ("Samara", "Europe/Samara", 14400),
    ("Tbilisi", "Asia/Tbilisi", 14400),
    ("Yerevan", "Asia/Yerevan", 14400),
    ("Kabul", "Asia/Kabul", 16200),
    ("Almaty", "Asia/Almaty", 18000),
    ("Astana", "Asia/Almaty", 18000),
    ("Ekaterinburg", "Asia/Yekaterinburg", 18000),
    ("Islamabad", "Asia/Karachi", 18000),
    ("Karachi", "Asia/Karachi", 18000),
    ("Tashkent", "Asia/Tashkent", 18000),
    ("Chennai", "Asia/Kolkata", 19800),
    ("Kolkata", "Asia/Kolkata", 19800),
    ("Mumbai", "Asia/Kolkata", 19800),
    ("New Delhi", "Asia/Kolkata", 19800),
    ("Sri Jayawardenepura", "Asia/Colombo", 19800),
    ("Kathmandu", "Asia/Kathmandu", 20700),
    ("Dhaka", "Asia/Dhaka", 21600),
    ("Urumqi", "Asia/Urumqi", 21600),
    ("Rangoon", "Asia/Yangon", 23400),
    ("Bangkok", "Asia/Bangkok", 25200),
    ("Hanoi", "Asia/Bangkok", 25200),
    ("Jakarta", "Asia/Jakarta", 25200),
    ("Krasnoyarsk", "Asia/Krasnoyarsk", 25200),
    ("Novosibirsk", "Asia/Novosibirsk", 25200),
    ("Beijing", "Asia/Shanghai", 28800),
    ("Chongqing", "Asia/Chongqing", 28800),
    ("Hong Kong", "Asia/Hong_Kong", 28800),
    ("Irkutsk", "Asia/Irkutsk", 28800),
    ("Kuala Lumpur", "Asia/Kuala_Lumpur", 28800),
    ("Perth", "Australia/Perth", 28800),
    ("Singapore", "Asia/Singapore", 28800),
    ("Taipei", "Asia/Taipei", 28800),
    ("Ulaanbaatar", "Asia/Ulaanbaatar", 28800),
    ("Osaka", "Asia/Tokyo", 32400),
    ("Sapporo", "Asia/Tokyo", 32400),
    ("Seoul", "Asia/Seoul", 32400),
    ("Tokyo", "Asia/Tokyo", 32400),
    ("Yakutsk", "Asia/Yakutsk", 32400),
    ("Adelaide", "Australia/Adelaide", 34200),
    ("Darwin", "Australia/Darwin", 34200),
    ("Brisbane", "Australia/Brisbane", 36000),
    ("Canberra", "Australia/Melbourne", 36000),
    ("Guam", "Pacific/Guam", 36000),
    ("Hobart", "Australia/Hobart", 36000),
    ("Melbourne", "Australia/Melbourne", 36000),
    ("Port Moresby", "Pacific/Port_Moresby", 36000),
    ("Sydney", "Australia/Sydney", 36000),
    ("Vladivostok", "Asia/Vladivostok", 36000),
    ("Magadan", "Asia/Magadan", 39600),
    ("New Caledonia", "Pacific/Noumea", 39600),
    ("Solomon Is.", "Pacific/Guadalcanal", 39600),
    ("Srednekolymsk", "Asia/Srednekolymsk", 39600),
    ("Auckland", "Pacific/Auckland", 43200),
    ("Fiji", "Pacific/Fiji", 43200),
    ("Kamchatka", "Asia/Kamchatka", 43200),
    ("Marshall Is.", "Pacific/Majuro", 43200),
    ("Wellington", "Pacific/Auckland", 43200),
    ("Chatham Is.", "Pacific/Chatham", 45900),
    ("Nuku'alofa", "Pacific/Tongatapu", 46800),
    ("Samoa", "Pacific/Apia", 46800),
    ("Tokelau Is.", "Pacific/Fakaofo", 46800),
];
