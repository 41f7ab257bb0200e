//! 言語タグの検証に使うコード表
//!
//! すべて小文字で昇順に並べてある。検索は二分探索で行う。

/// ISO 639-1 (2 文字) 言語コード
pub(super) const ISO_639_1: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az",
    "ba", "be", "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce",
    "ch", "co", "cr", "cs", "cu", "cv", "cy", "da", "de", "dv", "dz", "ee",
    "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr",
    "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
    "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is",
    "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn",
    "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln",
    "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms",
    "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
    "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu",
    "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk",
    "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta",
    "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw",
    "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu",
];

/// ISO 639-2 (3 文字) 言語コード
pub(super) const ISO_639_2: &[&str] = &[
    "aar", "abk", "ace", "ach", "ada", "ady", "afa", "afh", "afr", "ain",
    "aka", "akk", "alb", "ale", "alg", "alt", "amh", "ang", "anp", "apa",
    "ara", "arc", "arg", "arm", "arn", "arp", "art", "arw", "asm", "ast",
    "ath", "aus", "ava", "ave", "awa", "aym", "aze", "bad", "bai", "bak",
    "bal", "bam", "ban", "baq", "bas", "bat", "bej", "bel", "bem", "ben",
    "ber", "bho", "bih", "bik", "bin", "bis", "bla", "bnt", "bod", "bos",
    "bra", "bre", "btk", "bua", "bug", "bul", "bur", "byn", "cad", "cai",
    "car", "cat", "cau", "ceb", "cel", "ces", "cha", "chb", "che", "chg",
    "chi", "chk", "chm", "chn", "cho", "chp", "chr", "chu", "chv", "chy",
    "cmc", "cop", "cor", "cos", "cpe", "cpf", "cpp", "cre", "crh", "crp",
    "csb", "cus", "cym", "cze", "dak", "dan", "dar", "day", "del", "den",
    "deu", "dgr", "din", "div", "doi", "dra", "dsb", "dua", "dum", "dut",
    "dyu", "dzo", "efi", "egy", "eka", "ell", "elx", "eng", "enm", "epo",
    "est", "eus", "ewe", "ewo", "fan", "fao", "fas", "fat", "fij", "fil",
    "fin", "fiu", "fon", "fra", "fre", "frm", "fro", "frr", "frs", "fry",
    "ful", "fur", "gaa", "gay", "gba", "gem", "geo", "ger", "gez", "gil",
    "gla", "gle", "glg", "glv", "gmh", "goh", "gon", "gor", "got", "grb",
    "grc", "gre", "grn", "gsw", "guj", "gwi", "hai", "hat", "hau", "haw",
    "heb", "her", "hil", "him", "hin", "hit", "hmn", "hmo", "hrv", "hsb",
    "hun", "hup", "hye", "iba", "ibo", "ice", "ido", "iii", "ijo", "iku",
    "ile", "ilo", "ina", "inc", "ind", "ine", "inh", "ipk", "ira", "iro",
    "isl", "ita", "jav", "jbo", "jpn", "jpr", "jrb", "kaa", "kab", "kac",
    "kal", "kam", "kan", "kar", "kas", "kat", "kau", "kaw", "kaz", "kbd",
    "kha", "khi", "khm", "kho", "kik", "kin", "kir", "kmb", "kok", "kom",
    "kon", "kor", "kos", "kpe", "krc", "krl", "kro", "kru", "kua", "kum",
    "kur", "kut", "lad", "lah", "lam", "lao", "lat", "lav", "lez", "lim",
    "lin", "lit", "lol", "loz", "ltz", "lua", "lub", "lug", "lui", "lun",
    "luo", "lus", "mac", "mad", "mag", "mah", "mai", "mak", "mal", "man",
    "mao", "map", "mar", "mas", "may", "mdf", "mdr", "men", "mga", "mic",
    "min", "mis", "mkd", "mkh", "mlg", "mlt", "mnc", "mni", "mno", "moh",
    "mon", "mos", "mri", "msa", "mul", "mun", "mus", "mwl", "mwr", "mya",
    "myn", "myv", "nah", "nai", "nap", "nau", "nav", "nbl", "nde", "ndo",
    "nds", "nep", "new", "nia", "nic", "niu", "nld", "nno", "nob", "nog",
    "non", "nor", "nqo", "nso", "nub", "nwc", "nya", "nym", "nyn", "nyo",
    "nzi", "oci", "oji", "ori", "orm", "osa", "oss", "ota", "oto", "paa",
    "pag", "pal", "pam", "pan", "pap", "pau", "peo", "per", "phi", "phn",
    "pli", "pol", "pon", "por", "pra", "pro", "pus", "que", "raj", "rap",
    "rar", "roa", "roh", "rom", "ron", "rum", "run", "rup", "rus", "sad",
    "sag", "sah", "sai", "sal", "sam", "san", "sas", "sat", "scn", "sco",
    "sel", "sem", "sga", "sgn", "shn", "sid", "sin", "sio", "sit", "sla",
    "slk", "slo", "slv", "sma", "sme", "smi", "smj", "smn", "smo", "sms",
    "sna", "snd", "snk", "sog", "som", "son", "sot", "spa", "sqi", "srd",
    "srn", "srp", "srr", "ssa", "ssw", "suk", "sun", "sus", "sux", "swa",
    "swe", "syc", "syr", "tah", "tai", "tam", "tat", "tel", "tem", "ter",
    "tet", "tgk", "tgl", "tha", "tib", "tig", "tir", "tiv", "tkl", "tlh",
    "tli", "tmh", "tog", "ton", "tpi", "tsi", "tsn", "tso", "tuk", "tum",
    "tup", "tur", "tut", "tvl", "twi", "tyv", "udm", "uga", "uig", "ukr",
    "umb", "und", "urd", "uzb", "vai", "ven", "vie", "vol", "vot", "wak",
    "wal", "war", "was", "wel", "wen", "wln", "wol", "xal", "xho", "yao",
    "yap", "yid", "yor", "ypk", "zap", "zbl", "zen", "zgh", "zha", "zho",
    "znd", "zul", "zun", "zxx", "zza",
];

/// ISO 15924 文字体系コード
pub(super) const ISO_15924: &[&str] = &[
    "adlm", "afak", "aghb", "ahom", "arab", "aran", "armi", "armn",
    "avst", "bali", "bamu", "bass", "batk", "beng", "berf", "bhks",
    "blis", "bopo", "brah", "brai", "bugi", "buhd", "cakm", "cans",
    "cari", "cham", "cher", "chis", "chrs", "cirt", "copt", "cpmn",
    "cprt", "cyrl", "cyrs", "deva", "diak", "dogr", "dsrt", "dupl",
    "egyd", "egyh", "egyp", "elba", "elym", "ethi", "gara", "geok",
    "geor", "glag", "gong", "gonm", "goth", "gran", "grek", "gujr",
    "gukh", "guru", "hanb", "hang", "hani", "hano", "hans", "hant",
    "hatr", "hebr", "hira", "hluw", "hmng", "hmnp", "hrkt", "hung",
    "inds", "ital", "jamo", "java", "jpan", "jurc", "kali", "kana",
    "kawi", "khar", "khmr", "khoj", "kitl", "kits", "knda", "kore",
    "kpel", "krai", "kthi", "lana", "laoo", "latf", "latg", "latn",
    "leke", "lepc", "limb", "lina", "linb", "lisu", "loma", "lyci",
    "lydi", "mahj", "maka", "mand", "mani", "marc", "maya", "medf",
    "mend", "merc", "mero", "mlym", "modi", "mong", "moon", "mroo",
    "mtei", "mult", "mymr", "nagm", "nand", "narb", "nbat", "newa",
    "nkdb", "nkgb", "nkoo", "nshu", "ogam", "olck", "onao", "orkh",
    "orya", "osge", "osma", "ougr", "palm", "pauc", "pcun", "pelm",
    "perm", "phag", "phli", "phlp", "phlv", "phnx", "piqd", "plrd",
    "prti", "psin", "ranj", "rjng", "rohg", "roro", "runr", "samr",
    "sara", "sarb", "saur", "sgnw", "shaw", "shrd", "shui", "sidd",
    "sidt", "sind", "sinh", "sogd", "sogo", "sora", "soyo", "sund",
    "sunu", "sylo", "syrc", "syre", "syrj", "syrn", "tagb", "takr",
    "tale", "talu", "taml", "tang", "tavt", "tayo", "telu", "teng",
    "tfng", "tglg", "thaa", "thai", "tibt", "tirh", "tnsa", "todr",
    "tols", "toto", "tutg", "ugar", "vaii", "visp", "vith", "wara",
    "wcho", "wole", "xpeo", "xsux", "yezi", "yiii", "zanb", "zinh",
    "zmth", "zsye", "zsym", "zxxx", "zyyy", "zzzz",
];

/// ISO 3166-1 alpha-2 地域コード
pub(super) const ISO_3166_ALPHA2: &[&str] = &[
    "ad", "ae", "af", "ag", "ai", "al", "am", "ao", "aq", "ar", "as", "at",
    "au", "aw", "ax", "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi",
    "bj", "bl", "bm", "bn", "bo", "bq", "br", "bs", "bt", "bv", "bw", "by",
    "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl", "cm", "cn",
    "co", "cr", "cu", "cv", "cw", "cx", "cy", "cz", "de", "dj", "dk", "dm",
    "do", "dz", "ec", "ee", "eg", "eh", "er", "es", "et", "fi", "fj", "fk",
    "fm", "fo", "fr", "ga", "gb", "gd", "ge", "gf", "gg", "gh", "gi", "gl",
    "gm", "gn", "gp", "gq", "gr", "gs", "gt", "gu", "gw", "gy", "hk", "hm",
    "hn", "hr", "ht", "hu", "id", "ie", "il", "im", "in", "io", "iq", "ir",
    "is", "it", "je", "jm", "jo", "jp", "ke", "kg", "kh", "ki", "km", "kn",
    "kp", "kr", "kw", "ky", "kz", "la", "lb", "lc", "li", "lk", "lr", "ls",
    "lt", "lu", "lv", "ly", "ma", "mc", "md", "me", "mf", "mg", "mh", "mk",
    "ml", "mm", "mn", "mo", "mp", "mq", "mr", "ms", "mt", "mu", "mv", "mw",
    "mx", "my", "mz", "na", "nc", "ne", "nf", "ng", "ni", "nl", "no", "np",
    "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph", "pk", "pl", "pm",
    "pn", "pr", "ps", "pt", "pw", "py", "qa", "re", "ro", "rs", "ru", "rw",
    "sa", "sb", "sc", "sd", "se", "sg", "sh", "si", "sj", "sk", "sl", "sm",
    "sn", "so", "sr", "ss", "st", "sv", "sx", "sy", "sz", "tc", "td", "tf",
    "tg", "th", "tj", "tk", "tl", "tm", "tn", "to", "tr", "tt", "tv", "tw",
    "tz", "ua", "ug", "um", "us", "uy", "uz", "va", "vc", "ve", "vg", "vi",
    "vn", "vu", "wf", "ws", "ye", "yt", "za", "zm", "zw",
];

/// ISO 3166-1 numeric 地域コード
pub(super) const ISO_3166_NUMERIC: &[&str] = &[
    "004", "008", "010", "012", "016", "020", "024", "028", "031", "032",
    "036", "040", "044", "048", "050", "051", "052", "056", "060", "064",
    "068", "070", "072", "074", "076", "084", "086", "090", "092", "096",
    "100", "104", "108", "112", "116", "120", "124", "132", "136", "140",
    "144", "148", "152", "156", "158", "162", "166", "170", "174", "175",
    "178", "180", "184", "188", "191", "192", "196", "203", "204", "208",
    "212", "214", "218", "222", "226", "231", "232", "233", "234", "238",
    "239", "242", "246", "248", "250", "254", "258", "260", "262", "266",
    "268", "270", "275", "276", "288", "292", "296", "300", "304", "308",
    "312", "316", "320", "324", "328", "332", "334", "336", "340", "344",
    "348", "352", "356", "360", "364", "368", "372", "376", "380", "384",
    "388", "392", "398", "400", "404", "408", "410", "414", "417", "418",
    "422", "426", "428", "430", "434", "438", "440", "442", "446", "450",
    "454", "458", "462", "466", "470", "474", "478", "480", "484", "492",
    "496", "498", "499", "500", "504", "508", "512", "516", "520", "524",
    "528", "531", "533", "534", "535", "540", "548", "554", "558", "562",
    "566", "570", "574", "578", "580", "581", "583", "584", "585", "586",
    "591", "598", "600", "604", "608", "612", "616", "620", "624", "626",
    "630", "634", "638", "642", "643", "646", "652", "654", "659", "660",
    "662", "663", "666", "670", "674", "678", "682", "686", "688", "690",
    "694", "702", "703", "704", "705", "706", "710", "716", "724", "728",
    "729", "732", "740", "744", "748", "752", "756", "760", "762", "764",
    "768", "772", "776", "780", "784", "788", "792", "795", "796", "798",
    "800", "804", "807", "818", "826", "831", "832", "833", "834", "840",
    "850", "854", "858", "860", "862", "876", "882", "887", "894",
];

/// UN M.49 の地理的区分コード (例: 419 = ラテンアメリカ)
pub(super) const UN_M49_AREAS: &[&str] = &[
    "001", "002", "003", "005", "009", "011", "013", "014", "015", "017",
    "018", "019", "021", "029", "030", "034", "035", "039", "053", "054",
    "057", "061", "142", "143", "145", "150", "151", "154", "155", "202",
    "419",
];

/// コード表に含まれるか
pub(super) fn contains(table: &[&str], code: &str) -> bool {
    table.binary_search(&code).is_ok()
}
