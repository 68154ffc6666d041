//! Country name normalization.
//!
//! Mautic only accepts country values from its own list of English names.
//! `normalize_country` maps every ISO 3166-1 alpha-2 and alpha-3 code, plus
//! common English and French spellings, onto those names and returns anything
//! it does not recognise as-is.

/// Canonical Mautic name and the aliases that map to it.
///
/// Aliases are compared after `lookup_key`, so case, dots and repeated
/// whitespace do not matter. No key may appear under two countries.
const COUNTRIES: &[(&str, &[&str])] = &[
    ("Afghanistan", &["af", "afg"]),
    ("Aland Islands", &["ax", "ala", "åland islands", "åland"]),
    ("Albania", &["al", "alb", "albanie"]),
    ("Algeria", &["dz", "dza", "algérie", "algerie"]),
    ("American Samoa", &["as", "asm", "samoa américaines"]),
    ("Andorra", &["ad", "and", "andorre"]),
    ("Angola", &["ao", "ago"]),
    ("Anguilla", &["ai", "aia"]),
    ("Antarctica", &["aq", "ata", "antarctique"]),
    ("Antigua and Barbuda", &["ag", "atg", "antigua-et-barbuda"]),
    ("Argentina", &["ar", "arg", "argentine"]),
    ("Armenia", &["am", "arm", "arménie", "armenie"]),
    ("Aruba", &["aw", "abw"]),
    ("Australia", &["au", "aus", "australie"]),
    ("Austria", &["at", "aut", "autriche", "österreich"]),
    ("Azerbaijan", &["az", "aze", "azerbaïdjan", "azerbaidjan"]),
    ("Bahamas", &["bs", "bhs", "the bahamas"]),
    ("Bahrain", &["bh", "bhr", "bahreïn", "bahrein"]),
    ("Bangladesh", &["bd", "bgd"]),
    ("Barbados", &["bb", "brb", "barbade"]),
    ("Belarus", &["by", "blr", "biélorussie", "bielorussie"]),
    ("Belgium", &["be", "bel", "belgique", "belgië"]),
    ("Belize", &["bz", "blz"]),
    ("Benin", &["bj", "ben", "bénin"]),
    ("Bermuda", &["bm", "bmu", "bermudes"]),
    ("Bhutan", &["bt", "btn", "bhoutan"]),
    ("Bolivia", &["bo", "bol", "bolivie", "plurinational state of bolivia"]),
    ("Bonaire, Saint Eustatius and Saba", &["bq", "bes", "bonaire", "caribbean netherlands"]),
    ("Bosnia and Herzegovina", &["ba", "bih", "bosnie-herzégovine", "bosnia"]),
    ("Botswana", &["bw", "bwa"]),
    ("Bouvet Island", &["bv", "bvt", "île bouvet"]),
    ("Brazil", &["br", "bra", "brasil", "brésil", "bresil"]),
    ("British Indian Ocean Territory", &["io", "iot"]),
    (
        "British Virgin Islands",
        &["vg", "vgb", "virgin islands, british", "îles vierges britanniques"],
    ),
    ("Brunei", &["bn", "brn", "brunei darussalam"]),
    ("Bulgaria", &["bg", "bgr", "bulgarie"]),
    ("Burkina Faso", &["bf", "bfa", "burkina"]),
    ("Burundi", &["bi", "bdi"]),
    ("Cambodia", &["kh", "khm", "cambodge"]),
    ("Cameroon", &["cm", "cmr", "cameroun", "republic of cameroon"]),
    ("Canada", &["ca", "can"]),
    ("Cape Verde", &["cv", "cpv", "cabo verde", "cap-vert", "cap vert"]),
    ("Cayman Islands", &["ky", "cym", "îles caïmans"]),
    (
        "Central African Republic",
        &["cf", "caf", "car", "centrafrique", "république centrafricaine"],
    ),
    ("Chad", &["td", "tcd", "tchad"]),
    ("Chile", &["cl", "chl", "chili"]),
    ("China", &["cn", "chn", "prc", "people's republic of china", "chine"]),
    ("Christmas Island", &["cx", "cxr"]),
    ("Cocos Islands", &["cc", "cck", "cocos (keeling) islands"]),
    ("Colombia", &["co", "col", "colombie"]),
    ("Comoros", &["km", "com", "comores"]),
    ("Congo", &["cg", "cog", "republic of the congo", "congo-brazzaville", "congo brazzaville"]),
    ("Cook Islands", &["ck", "cok", "îles cook"]),
    ("Costa Rica", &["cr", "cri"]),
    ("Croatia", &["hr", "hrv", "croatie", "hrvatska"]),
    ("Cuba", &["cu", "cub"]),
    ("Curacao", &["cw", "cuw", "curaçao"]),
    ("Cyprus", &["cy", "cyp", "chypre"]),
    ("Czech Republic", &["cz", "cze", "czechia", "république tchèque"]),
    (
        "Democratic Republic of the Congo",
        &[
            "cd",
            "cod",
            "drc",
            "dr congo",
            "rdc",
            "congo-kinshasa",
            "congo kinshasa",
            "république démocratique du congo",
        ],
    ),
    ("Denmark", &["dk", "dnk", "danemark"]),
    ("Djibouti", &["dj", "dji"]),
    ("Dominica", &["dm", "dma", "dominique"]),
    ("Dominican Republic", &["do", "dom", "république dominicaine"]),
    ("East Timor", &["tl", "tls", "timor-leste", "timor leste"]),
    ("Ecuador", &["ec", "ecu", "équateur", "equateur"]),
    ("Egypt", &["eg", "egy", "égypte", "egypte"]),
    ("El Salvador", &["sv", "slv", "salvador"]),
    ("Equatorial Guinea", &["gq", "gnq", "guinée équatoriale", "guinee equatoriale"]),
    ("Eritrea", &["er", "eri", "érythrée", "erythree"]),
    ("Estonia", &["ee", "est", "estonie"]),
    ("Ethiopia", &["et", "eth", "éthiopie", "ethiopie"]),
    ("Falkland Islands", &["fk", "flk", "falkland islands (malvinas)", "malvinas"]),
    ("Faroe Islands", &["fo", "fro", "îles féroé"]),
    ("Fiji", &["fj", "fji", "fidji"]),
    ("Finland", &["fi", "fin", "finlande"]),
    ("France", &["fr", "fra", "république française"]),
    ("French Guiana", &["gf", "guf", "guyane", "guyane française"]),
    ("French Polynesia", &["pf", "pyf", "polynésie française"]),
    ("French Southern Territories", &["tf", "atf", "terres australes françaises"]),
    ("Gabon", &["ga", "gab", "gabonese republic"]),
    ("Gambia", &["gm", "gmb", "the gambia", "gambie"]),
    ("Georgia", &["ge", "geo", "géorgie"]),
    ("Germany", &["de", "deu", "allemagne", "deutschland"]),
    ("Ghana", &["gh", "gha"]),
    ("Gibraltar", &["gi", "gib"]),
    ("Greece", &["gr", "grc", "grèce", "grece", "hellas"]),
    ("Greenland", &["gl", "grl", "groenland"]),
    ("Grenada", &["gd", "grd", "grenade"]),
    ("Guadeloupe", &["gp", "glp"]),
    ("Guam", &["gu", "gum"]),
    ("Guatemala", &["gt", "gtm"]),
    ("Guernsey", &["gg", "ggy", "guernesey"]),
    ("Guinea", &["gn", "gin", "guinée", "guinee", "guinea-conakry", "guinée-conakry"]),
    ("Guinea-Bissau", &["gw", "gnb", "guinea bissau", "guinée-bissau", "guinee-bissau"]),
    ("Guyana", &["gy", "guy"]),
    ("Haiti", &["ht", "hti", "haïti"]),
    ("Heard Island and McDonald Islands", &["hm", "hmd"]),
    ("Honduras", &["hn", "hnd"]),
    ("Hong Kong", &["hk", "hkg"]),
    ("Hungary", &["hu", "hun", "hongrie"]),
    ("Iceland", &["is", "isl", "islande"]),
    ("India", &["in", "ind", "inde", "bharat"]),
    ("Indonesia", &["id", "idn", "indonésie", "indonesie"]),
    ("Iran", &["ir", "irn", "islamic republic of iran"]),
    ("Iraq", &["iq", "irq", "irak"]),
    ("Ireland", &["ie", "irl", "irlande", "republic of ireland", "eire"]),
    ("Isle of Man", &["im", "imn", "île de man"]),
    ("Israel", &["il", "isr", "israël"]),
    ("Italy", &["it", "ita", "italie", "italia"]),
    (
        "Ivory Coast",
        &["ci", "civ", "côte d'ivoire", "cote d'ivoire", "cote divoire", "côte divoire"],
    ),
    ("Jamaica", &["jm", "jam", "jamaïque", "jamaique"]),
    ("Japan", &["jp", "jpn", "japon"]),
    ("Jersey", &["je", "jey"]),
    ("Jordan", &["jo", "jor", "jordanie"]),
    ("Kazakhstan", &["kz", "kaz"]),
    ("Kenya", &["ke", "ken"]),
    ("Kiribati", &["ki", "kir"]),
    ("Kosovo", &["xk", "xkx"]),
    ("Kuwait", &["kw", "kwt", "koweït", "koweit"]),
    ("Kyrgyzstan", &["kg", "kgz", "kirghizistan"]),
    ("Laos", &["la", "lao", "lao people's democratic republic"]),
    ("Latvia", &["lv", "lva", "lettonie"]),
    ("Lebanon", &["lb", "lbn", "liban"]),
    ("Lesotho", &["ls", "lso"]),
    ("Liberia", &["lr", "lbr", "libéria"]),
    ("Libya", &["ly", "lby", "libye"]),
    ("Liechtenstein", &["li", "lie"]),
    ("Lithuania", &["lt", "ltu", "lituanie"]),
    ("Luxembourg", &["lu", "lux"]),
    ("Macao", &["mo", "mac", "macau"]),
    ("Madagascar", &["mg", "mdg"]),
    ("Malawi", &["mw", "mwi"]),
    ("Malaysia", &["my", "mys", "malaisie"]),
    ("Maldives", &["mv", "mdv"]),
    ("Mali", &["ml", "mli"]),
    ("Malta", &["mt", "mlt", "malte"]),
    ("Marshall Islands", &["mh", "mhl", "îles marshall"]),
    ("Martinique", &["mq", "mtq"]),
    ("Mauritania", &["mr", "mrt", "mauritanie"]),
    ("Mauritius", &["mu", "mus", "maurice", "île maurice"]),
    ("Mayotte", &["yt", "myt"]),
    ("Mexico", &["mx", "mex", "mexique", "méxico"]),
    ("Micronesia", &["fm", "fsm", "federated states of micronesia", "micronésie"]),
    ("Moldova", &["md", "mda", "republic of moldova", "moldavie"]),
    ("Monaco", &["mc", "mco"]),
    ("Mongolia", &["mn", "mng", "mongolie"]),
    ("Montenegro", &["me", "mne", "monténégro"]),
    ("Montserrat", &["ms", "msr"]),
    ("Morocco", &["ma", "mar", "maroc"]),
    ("Mozambique", &["mz", "moz"]),
    ("Myanmar", &["mm", "mmr", "burma", "birmanie"]),
    ("Namibia", &["na", "nam", "namibie"]),
    ("Nauru", &["nr", "nru"]),
    ("Nepal", &["np", "npl", "népal"]),
    ("Netherlands", &["nl", "nld", "the netherlands", "holland", "pays-bas", "nederland"]),
    ("New Caledonia", &["nc", "ncl", "nouvelle-calédonie"]),
    ("New Zealand", &["nz", "nzl", "nouvelle-zélande"]),
    ("Nicaragua", &["ni", "nic"]),
    ("Niger", &["ne", "ner"]),
    ("Nigeria", &["ng", "nga", "nigéria"]),
    ("Niue", &["nu", "niu"]),
    ("Norfolk Island", &["nf", "nfk"]),
    (
        "North Korea",
        &["kp", "prk", "democratic people's republic of korea", "dprk", "corée du nord"],
    ),
    ("North Macedonia", &["mk", "mkd", "macedonia", "macédoine du nord", "macédoine"]),
    ("Northern Mariana Islands", &["mp", "mnp"]),
    ("Norway", &["no", "nor", "norvège", "norge"]),
    ("Oman", &["om", "omn"]),
    ("Pakistan", &["pk", "pak"]),
    ("Palau", &["pw", "plw"]),
    ("Palestine", &["ps", "pse", "state of palestine", "palestinian territory"]),
    ("Panama", &["pa", "pan"]),
    ("Papua New Guinea", &["pg", "png", "papouasie-nouvelle-guinée"]),
    ("Paraguay", &["py", "pry"]),
    ("Peru", &["pe", "per", "pérou", "perou"]),
    ("Philippines", &["ph", "phl"]),
    ("Pitcairn", &["pn", "pcn", "pitcairn islands"]),
    ("Poland", &["pl", "pol", "pologne", "polska"]),
    ("Portugal", &["pt", "prt"]),
    ("Puerto Rico", &["pr", "pri", "porto rico"]),
    ("Qatar", &["qa", "qat"]),
    ("Reunion", &["re", "reu", "réunion", "la réunion"]),
    ("Romania", &["ro", "rou", "roumanie"]),
    ("Russia", &["ru", "rus", "russian federation", "russie"]),
    ("Rwanda", &["rw", "rwa"]),
    ("Saint Barthelemy", &["bl", "blm", "saint-barthélemy"]),
    ("Saint Helena", &["sh", "shn", "sainte-hélène"]),
    ("Saint Kitts and Nevis", &["kn", "kna", "saint-christophe-et-niévès"]),
    ("Saint Lucia", &["lc", "lca", "sainte-lucie"]),
    ("Saint Martin", &["mf", "maf", "saint-martin"]),
    ("Saint Pierre and Miquelon", &["pm", "spm", "saint-pierre-et-miquelon"]),
    ("Saint Vincent and the Grenadines", &["vc", "vct", "saint-vincent-et-les-grenadines"]),
    ("Samoa", &["ws", "wsm"]),
    ("San Marino", &["sm", "smr", "saint-marin"]),
    (
        "Sao Tome and Principe",
        &["st", "stp", "são tomé and príncipe", "sao tomé-et-principe", "são tomé-et-príncipe"],
    ),
    ("Saudi Arabia", &["sa", "sau", "ksa", "arabie saoudite"]),
    ("Senegal", &["sn", "sen", "sénégal"]),
    ("Serbia", &["rs", "srb", "serbie"]),
    ("Seychelles", &["sc", "syc"]),
    ("Sierra Leone", &["sl", "sle"]),
    ("Singapore", &["sg", "sgp", "singapour"]),
    ("Sint Maarten", &["sx", "sxm"]),
    ("Slovakia", &["sk", "svk", "slovaquie"]),
    ("Slovenia", &["si", "svn", "slovénie"]),
    ("Solomon Islands", &["sb", "slb", "îles salomon"]),
    ("Somalia", &["so", "som", "somalie"]),
    ("South Africa", &["za", "zaf", "rsa", "afrique du sud"]),
    ("South Georgia and the South Sandwich Islands", &["gs", "sgs"]),
    (
        "South Korea",
        &["kr", "kor", "korea", "republic of korea", "korea, republic of", "corée du sud"],
    ),
    ("South Sudan", &["ss", "ssd", "soudan du sud"]),
    ("Spain", &["es", "esp", "espagne", "españa", "espana"]),
    ("Sri Lanka", &["lk", "lka"]),
    ("Sudan", &["sd", "sdn", "soudan"]),
    ("Suriname", &["sr", "sur"]),
    ("Svalbard and Jan Mayen", &["sj", "sjm"]),
    ("Swaziland", &["sz", "swz", "eswatini"]),
    ("Sweden", &["se", "swe", "suède", "sverige"]),
    ("Switzerland", &["ch", "che", "suisse", "schweiz", "svizzera"]),
    ("Syria", &["sy", "syr", "syrian arab republic", "syrie"]),
    ("Taiwan", &["tw", "twn", "taïwan"]),
    ("Tajikistan", &["tj", "tjk", "tadjikistan"]),
    ("Tanzania", &["tz", "tza", "united republic of tanzania", "tanzanie"]),
    ("Thailand", &["th", "tha", "thaïlande", "thailande"]),
    ("Togo", &["tg", "tgo", "togolese republic"]),
    ("Tokelau", &["tk", "tkl"]),
    ("Tonga", &["to", "ton"]),
    ("Trinidad and Tobago", &["tt", "tto", "trinité-et-tobago"]),
    ("Tunisia", &["tn", "tun", "tunisie"]),
    ("Turkey", &["tr", "tur", "türkiye", "turkiye", "turquie"]),
    ("Turkmenistan", &["tm", "tkm", "turkménistan"]),
    ("Turks and Caicos Islands", &["tc", "tca"]),
    ("Tuvalu", &["tv", "tuv"]),
    ("Uganda", &["ug", "uga", "ouganda"]),
    ("Ukraine", &["ua", "ukr"]),
    ("United Arab Emirates", &["ae", "are", "uae", "emirates", "émirats arabes unis"]),
    (
        "United Kingdom",
        &[
            "gb",
            "gbr",
            "uk",
            "great britain",
            "britain",
            "england",
            "scotland",
            "wales",
            "northern ireland",
            "royaume-uni",
            "united kingdom of great britain and northern ireland",
        ],
    ),
    (
        "United States",
        &[
            "us",
            "usa",
            "united states of america",
            "america",
            "états-unis",
            "etats-unis",
            "états-unis d'amérique",
        ],
    ),
    ("United States Minor Outlying Islands", &["um", "umi"]),
    ("Uruguay", &["uy", "ury"]),
    (
        "US Virgin Islands",
        &[
            "vi",
            "vir",
            "virgin islands, us",
            "united states virgin islands",
            "îles vierges des états-unis",
        ],
    ),
    ("Uzbekistan", &["uz", "uzb", "ouzbékistan"]),
    ("Vanuatu", &["vu", "vut"]),
    ("Vatican City", &["va", "vat", "holy see", "vatican", "saint-siège"]),
    ("Venezuela", &["ve", "ven", "bolivarian republic of venezuela"]),
    ("Vietnam", &["vn", "vnm", "viet nam"]),
    ("Wallis and Futuna", &["wf", "wlf", "wallis-et-futuna"]),
    ("Western Sahara", &["eh", "esh", "sahara occidental"]),
    ("Yemen", &["ye", "yem", "yémen"]),
    ("Zambia", &["zm", "zmb", "zambie"]),
    ("Zimbabwe", &["zw", "zwe"]),
];

/// Returns the Mautic spelling of `input`, or `input` unchanged when it is
/// not a known country or alias.
///
/// Idempotent: canonical names map to themselves.
pub fn normalize_country(input: &str) -> String {
    canonical_country(input)
        .map(str::to_string)
        .unwrap_or_else(|| input.to_string())
}

/// The canonical name for `input`, if recognised.
pub fn canonical_country(input: &str) -> Option<&'static str> {
    let key = lookup_key(input);
    if key.is_empty() {
        return None;
    }
    COUNTRIES
        .iter()
        .find(|(name, aliases)| {
            lookup_key(name) == key || aliases.iter().any(|alias| lookup_key(alias) == key)
        })
        .map(|(name, _)| *name)
}

fn lookup_key(raw: &str) -> String {
    raw.replace('’', "'")
        .replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
