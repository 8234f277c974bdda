//! The fixed ISO 4217 currency table.
//!
//! This is the declarative data the registry is seeded from: one entry per
//! alphabetic code, straight from the ISO 4217 list (symbols from xe.com),
//! including the `XXX` "no currency" sentinel. A numeric code of `None`
//! marks the few reserved codes the standard leaves blank.

use crate::currency::Currency;

macro_rules! currencies {
    ($(($code:literal, $numeric:expr, $digits:literal, $symbol:literal, $name:literal, [$($territory:literal),*]),)*) => {
        pub(crate) fn table() -> Vec<Currency> {
            vec![
                $(Currency::new($code, $numeric, $name, $symbol, $digits, &[$($territory),*]),)*
            ]
        }
    };
}

currencies! {
    ("AED", Some("784"), 2, "", "UAE Dirham", ["UNITED ARAB EMIRATES"]),
    ("AFN", Some("971"), 2, "؋", "Afghani", ["AFGHANISTAN"]),
    ("ALL", Some("008"), 2, "Lek", "Lek", ["ALBANIA"]),
    ("AMD", Some("051"), 2, "", "Armenian Dram", ["ARMENIA"]),
    ("ANG", Some("532"), 2, "ƒ", "Netherlands Antillean Guilder", ["CURAÇAO", "SINT MAARTEN (DUTCH PART)"]),
    ("AOA", Some("973"), 2, "", "Kwanza", ["ANGOLA"]),
    ("ARS", Some("032"), 2, "$", "Argentine Peso", ["ARGENTINA"]),
    ("AUD", Some("036"), 2, "$", "Australian Dollar", ["AUSTRALIA", "CHRISTMAS ISLAND", "COCOS (KEELING) ISLANDS", "HEARD ISLAND AND McDONALD ISLANDS", "KIRIBATI", "NAURU", "NORFOLK ISLAND", "TUVALU"]),
    ("AWG", Some("533"), 2, "ƒ", "Aruban Florin", ["ARUBA"]),
    ("AZN", Some("944"), 2, "ман", "Azerbaijanian Manat", ["AZERBAIJAN"]),
    ("BAM", Some("977"), 2, "KM", "Convertible Mark", ["BOSNIA AND HERZEGOVINA"]),
    ("BBD", Some("052"), 2, "$", "Barbados Dollar", ["BARBADOS"]),
    ("BDT", Some("050"), 2, "", "Taka", ["BANGLADESH"]),
    ("BGN", Some("975"), 2, "лв", "Bulgarian Lev", ["BULGARIA"]),
    ("BHD", Some("048"), 3, "", "Bahraini Dinar", ["BAHRAIN"]),
    ("BIF", Some("108"), 0, "", "Burundi Franc", ["BURUNDI"]),
    ("BMD", Some("060"), 2, "$", "Bermudian Dollar", ["BERMUDA"]),
    ("BND", Some("096"), 2, "$", "Brunei Dollar", ["BRUNEI DARUSSALAM"]),
    ("BOB", Some("068"), 2, "$b", "Boliviano", ["BOLIVIA, PLURINATIONAL STATE OF"]),
    ("BOV", Some("984"), 2, "", "Mvdol", ["BOLIVIA, PLURINATIONAL STATE OF"]),
    ("BRL", Some("986"), 2, "R$", "Brazilian Real", ["BRAZIL"]),
    ("BSD", Some("044"), 2, "$", "Bahamian Dollar", ["BAHAMAS"]),
    ("BTN", Some("064"), 2, "", "Ngultrum", ["BHUTAN"]),
    ("BWP", Some("072"), 2, "P", "Pula", ["BOTSWANA"]),
    ("BYR", Some("974"), 0, "p.", "Belarussian Ruble", ["BELARUS"]),
    ("BZD", Some("084"), 2, "BZ$", "Belize Dollar", ["BELIZE"]),
    ("CAD", Some("124"), 2, "$", "Canadian Dollar", ["CANADA"]),
    ("CDF", Some("976"), 2, "", "Congolese Franc", ["CONGO, THE DEMOCRATIC REPUBLIC OF"]),
    ("CHE", Some("947"), 2, "", "WIR Euro", ["SWITZERLAND"]),
    ("CHF", Some("756"), 2, "Fr.", "Swiss Franc", ["LIECHTENSTEIN", "SWITZERLAND"]),
    ("CHW", Some("948"), 2, "", "WIR Franc", ["SWITZERLAND"]),
    ("CLF", Some("990"), 0, "", "Unidades de fomento", ["CHILE"]),
    ("CLP", Some("152"), 0, "$", "Chilean Peso", ["CHILE"]),
    ("CNY", Some("156"), 2, "¥", "Yuan Renminbi", ["CHINA"]),
    ("COP", Some("170"), 2, "$", "Colombian Peso", ["COLOMBIA"]),
    ("COU", Some("970"), 2, "", "Unidad de Valor Real", ["COLOMBIA"]),
    ("CRC", Some("188"), 2, "₡", "Costa Rican Colon", ["COSTA RICA"]),
    ("CUC", Some("931"), 2, "", "Peso Convertible", ["CUBA"]),
    ("CUP", Some("192"), 2, "₱", "Cuban Peso", ["CUBA"]),
    ("CVE", Some("132"), 2, "", "Cape Verde Escudo", ["CAPE VERDE"]),
    ("CZK", Some("203"), 2, "Kč", "Czech Koruna", ["CZECH REPUBLIC"]),
    ("DJF", Some("262"), 0, "", "Djibouti Franc", ["DJIBOUTI"]),
    ("DKK", Some("208"), 2, "kr", "Danish Krone", ["DENMARK", "FAROE ISLANDS", "GREENLAND"]),
    ("DOP", Some("214"), 2, "RD$", "Dominican Peso", ["DOMINICAN REPUBLIC"]),
    ("DZD", Some("012"), 2, "", "Algerian Dinar", ["ALGERIA"]),
    ("EGP", Some("818"), 2, "£", "Egyptian Pound", ["EGYPT"]),
    ("ERN", Some("232"), 2, "", "Nakfa", ["ERITREA"]),
    ("ETB", Some("230"), 2, "", "Ethiopian Birr", ["ETHIOPIA"]),
    ("EUR", Some("978"), 2, "€", "Euro", ["ÅLAND ISLANDS", "ANDORRA", "AUSTRIA", "BELGIUM", "CYPRUS", "ESTONIA", "EUROPEAN UNION ", "FINLAND", "FRANCE", "FRENCH GUIANA", "FRENCH SOUTHERN TERRITORIES", "GERMANY", "GREECE", "GUADELOUPE", "HOLY SEE (VATICAN CITY STATE)", "IRELAND", "ITALY", "LUXEMBOURG", "MALTA", "MARTINIQUE", "MAYOTTE", "MONACO", "MONTENEGRO", "NETHERLANDS", "PORTUGAL", "RÉUNION", "SAINT BARTHÉLEMY", "SAINT MARTIN (FRENCH PART)", "SAINT PIERRE AND MIQUELON", "SAN MARINO", "SLOVAKIA", "SLOVENIA", "SPAIN", "Vatican City State (HOLY SEE)"]),
    ("FJD", Some("242"), 2, "$", "Fiji Dollar", ["FIJI"]),
    ("FKP", Some("238"), 2, "£", "Falkland Islands Pound", ["FALKLAND ISLANDS (MALVINAS)"]),
    ("GBP", Some("826"), 2, "£", "Pound Sterling", ["GUERNSEY", "ISLE OF MAN", "JERSEY", "UNITED KINGDOM"]),
    ("GEL", Some("981"), 2, "", "Lari", ["GEORGIA"]),
    ("GHS", Some("936"), 2, "", "Ghana Cedi", ["GHANA"]),
    ("GIP", Some("292"), 2, "£", "Gibraltar Pound", ["GIBRALTAR"]),
    ("GMD", Some("270"), 2, "", "Dalasi", ["GAMBIA"]),
    ("GNF", Some("324"), 0, "", "Guinea Franc", ["GUINEA"]),
    ("GTQ", Some("320"), 2, "Q", "Quetzal", ["GUATEMALA"]),
    ("GYD", Some("328"), 2, "$", "Guyana Dollar", ["GUYANA"]),
    ("HKD", Some("344"), 2, "HK$", "Hong Kong Dollar", ["HONG KONG"]),
    ("HNL", Some("340"), 2, "L", "Lempira", ["HONDURAS"]),
    ("HRK", Some("191"), 2, "kn", "Croatian Kuna", ["CROATIA"]),
    ("HTG", Some("332"), 2, "", "Gourde", ["HAITI"]),
    ("HUF", Some("348"), 2, "Ft", "Forint", ["HUNGARY"]),
    ("IDR", Some("360"), 2, "Rp", "Rupiah", ["INDONESIA"]),
    ("ILS", Some("376"), 2, "₪", "New Israeli Sheqel", ["ISRAEL"]),
    ("INR", Some("356"), 2, "", "Indian Rupee", ["BHUTAN", "INDIA"]),
    ("IQD", Some("368"), 3, "", "Iraqi Dinar", ["IRAQ"]),
    ("IRR", Some("364"), 2, "﷼", "Iranian Rial", ["IRAN, ISLAMIC REPUBLIC OF"]),
    ("ISK", Some("352"), 0, "kr", "Iceland Krona", ["ICELAND"]),
    ("JMD", Some("388"), 2, "J$", "Jamaican Dollar", ["JAMAICA"]),
    ("JOD", Some("400"), 3, "", "Jordanian Dinar", ["JORDAN"]),
    ("JPY", Some("392"), 0, "¥", "Yen", ["JAPAN"]),
    ("KES", Some("404"), 2, "", "Kenyan Shilling", ["KENYA"]),
    ("KGS", Some("417"), 2, "лв", "Som", ["KYRGYZSTAN"]),
    ("KHR", Some("116"), 2, "៛", "Riel", ["CAMBODIA"]),
    ("KMF", Some("174"), 0, "", "Comoro Franc", ["COMOROS"]),
    ("KPW", Some("408"), 2, "₩", "North Korean Won", ["KOREA, DEMOCRATIC PEOPLE’S REPUBLIC OF"]),
    ("KRW", Some("410"), 0, "₩", "Won", ["KOREA, REPUBLIC OF"]),
    ("KWD", Some("414"), 3, "", "Kuwaiti Dinar", ["KUWAIT"]),
    ("KYD", Some("136"), 2, "$", "Cayman Islands Dollar", ["CAYMAN ISLANDS"]),
    ("KZT", Some("398"), 2, "лв", "Tenge", ["KAZAKHSTAN"]),
    ("LAK", Some("418"), 2, "₭", "Kip", ["LAO PEOPLE’S DEMOCRATIC REPUBLIC"]),
    ("LBP", Some("422"), 2, "£", "Lebanese Pound", ["LEBANON"]),
    ("LKR", Some("144"), 2, "₨", "Sri Lanka Rupee", ["SRI LANKA"]),
    ("LRD", Some("430"), 2, "$", "Liberian Dollar", ["LIBERIA"]),
    ("LSL", Some("426"), 2, "", "Loti", ["LESOTHO"]),
    ("LTL", Some("440"), 2, "Lt", "Lithuanian Litas", ["LITHUANIA"]),
    ("LVL", Some("428"), 2, "Ls", "Latvian Lats", ["LATVIA"]),
    ("LYD", Some("434"), 3, "", "Libyan Dinar", ["LIBYA"]),
    ("MAD", Some("504"), 2, "", "Moroccan Dirham", ["MOROCCO", "WESTERN SAHARA"]),
    ("MDL", Some("498"), 2, "", "Moldovan Leu", ["MOLDOVA, REPUBLIC OF"]),
    ("MGA", Some("969"), 2, "", "Malagasy Ariary", ["MADAGASCAR"]),
    ("MKD", Some("807"), 2, "ден", "Denar", ["MACEDONIA, THE FORMER YUGOSLAV REPUBLIC OF"]),
    ("MMK", Some("104"), 2, "", "Kyat", ["MYANMAR"]),
    ("MNT", Some("496"), 2, "₮", "Tugrik", ["MONGOLIA"]),
    ("MOP", Some("446"), 2, "", "Pataca", ["MACAO"]),
    ("MRO", Some("478"), 2, "", "Ouguiya", ["MAURITANIA"]),
    ("MUR", Some("480"), 2, "₨", "Mauritius Rupee", ["MAURITIUS"]),
    ("MVR", Some("462"), 2, "", "Rufiyaa", ["MALDIVES"]),
    ("MWK", Some("454"), 2, "", "Kwacha", ["MALAWI"]),
    ("MXN", Some("484"), 2, "$", "Mexican Peso", ["MEXICO"]),
    ("MXV", Some("979"), 2, "", "Mexican Unidad de Inversion (UDI)", ["MEXICO"]),
    ("MYR", Some("458"), 2, "RM", "Malaysian Ringgit", ["MALAYSIA"]),
    ("MZN", Some("943"), 2, "MT", "Mozambique Metical", ["MOZAMBIQUE"]),
    ("NAD", Some("516"), 2, "$", "Namibia Dollar", ["NAMIBIA"]),
    ("NGN", Some("566"), 2, "₦", "Naira", ["NIGERIA"]),
    ("NIO", Some("558"), 2, "C$", "Cordoba Oro", ["NICARAGUA"]),
    ("NOK", Some("578"), 2, "kr", "Norwegian Krone", ["BOUVET ISLAND", "NORWAY", "SVALBARD AND JAN MAYEN"]),
    ("NPR", Some("524"), 2, "₨", "Nepalese Rupee", ["NEPAL"]),
    ("NZD", Some("554"), 2, "$", "New Zealand Dollar", ["COOK ISLANDS", "NEW ZEALAND", "NIUE", "PITCAIRN", "TOKELAU"]),
    ("OMR", Some("512"), 3, "﷼", "Rial Omani", ["OMAN"]),
    ("PAB", Some("590"), 2, "B/.", "Balboa", ["PANAMA"]),
    ("PEN", Some("604"), 2, "S/.", "Nuevo Sol", ["PERU"]),
    ("PGK", Some("598"), 2, "", "Kina", ["PAPUA NEW GUINEA"]),
    ("PHP", Some("608"), 2, "₱", "Philippine Peso", ["PHILIPPINES"]),
    ("PKR", Some("586"), 2, "₨", "Pakistan Rupee", ["PAKISTAN"]),
    ("PLN", Some("985"), 2, "zł", "Zloty", ["POLAND"]),
    ("PYG", Some("600"), 0, "Gs", "Guarani", ["PARAGUAY"]),
    ("QAR", Some("634"), 2, "﷼", "Qatari Rial", ["QATAR"]),
    ("RON", Some("946"), 2, "lei", "New Romanian Leu", ["ROMANIA"]),
    ("RSD", Some("941"), 2, "Дин.", "Serbian Dinar", ["SERBIA "]),
    ("RUB", Some("643"), 2, "руб", "Russian Ruble", ["RUSSIAN FEDERATION"]),
    ("RWF", Some("646"), 0, "", "Rwanda Franc", ["RWANDA"]),
    ("SAR", Some("682"), 2, "﷼", "Saudi Riyal", ["SAUDI ARABIA"]),
    ("SBD", Some("090"), 2, "$", "Solomon Islands Dollar", ["SOLOMON ISLANDS"]),
    ("SCR", Some("690"), 2, "₨", "Seychelles Rupee", ["SEYCHELLES"]),
    ("SDG", Some("938"), 2, "", "Sudanese Pound", ["SUDAN"]),
    ("SEK", Some("752"), 2, "kr", "Swedish Krona", ["SWEDEN"]),
    ("SGD", Some("702"), 2, "$", "Singapore Dollar", ["SINGAPORE"]),
    ("SHP", Some("654"), 2, "£", "Saint Helena Pound", ["SAINT HELENA, ASCENSION AND TRISTAN DA CUNHA"]),
    ("SLL", Some("694"), 2, "", "Leone", ["SIERRA LEONE"]),
    ("SOS", Some("706"), 2, "S", "Somali Shilling", ["SOMALIA"]),
    ("SRD", Some("968"), 2, "$", "Surinam Dollar", ["SURINAME"]),
    ("SSP", Some("728"), 2, "", "South Sudanese Pound", ["SOUTH SUDAN"]),
    ("STD", Some("678"), 2, "", "Dobra", ["SAO TOME AND PRINCIPE"]),
    ("SVC", Some("222"), 2, "$", "El Salvador Colon", ["EL SALVADOR"]),
    ("SYP", Some("760"), 2, "£", "Syrian Pound", ["SYRIAN ARAB REPUBLIC"]),
    ("SZL", Some("748"), 2, "", "Lilangeni", ["SWAZILAND"]),
    ("THB", Some("764"), 2, "฿", "Baht", ["THAILAND"]),
    ("TJS", Some("972"), 2, "", "Somoni", ["TAJIKISTAN"]),
    ("TMT", Some("934"), 2, "", "Turkmenistan New Manat", ["TURKMENISTAN"]),
    ("TND", Some("788"), 3, "", "Tunisian Dinar", ["TUNISIA"]),
    ("TOP", Some("776"), 2, "", "Pa’anga", ["TONGA"]),
    ("TRY", Some("949"), 2, "TL", "Turkish Lira", ["TURKEY"]),
    ("TTD", Some("780"), 2, "TT$", "Trinidad and Tobago Dollar", ["TRINIDAD AND TOBAGO"]),
    ("TWD", Some("901"), 2, "NT$", "New Taiwan Dollar", ["TAIWAN, PROVINCE OF CHINA"]),
    ("TZS", Some("834"), 2, "", "Tanzanian Shilling", ["TANZANIA, UNITED REPUBLIC OF"]),
    ("UAH", Some("980"), 2, "₴", "Hryvnia", ["UKRAINE"]),
    ("UGX", Some("800"), 2, "", "Uganda Shilling", ["UGANDA"]),
    ("USD", Some("840"), 2, "$", "US Dollar", ["AMERICAN SAMOA", "BONAIRE, SINT EUSTATIUS AND SABA", "BRITISH INDIAN OCEAN TERRITORY", "ECUADOR", "EL SALVADOR", "GUAM", "HAITI", "MARSHALL ISLANDS", "MICRONESIA, FEDERATED STATES OF", "NORTHERN MARIANA ISLANDS", "PALAU", "PANAMA", "PUERTO RICO", "TIMOR-LESTE", "TURKS AND CAICOS ISLANDS", "UNITED STATES", "UNITED STATES MINOR OUTLYING ISLANDS", "VIRGIN ISLANDS (BRITISH)", "VIRGIN ISLANDS (US)"]),
    ("USN", Some("997"), 2, "$", "US Dollar (Next day)", ["UNITED STATES"]),
    ("USS", Some("998"), 2, "$", "US Dollar (Same day)", ["UNITED STATES"]),
    ("UYI", Some("940"), 0, "", "Uruguay Peso en Unidades Indexadas (URUIURUI)", ["URUGUAY"]),
    ("UYU", Some("858"), 2, "$U", "Peso Uruguayo", ["URUGUAY"]),
    ("UZS", Some("860"), 2, "лв", "Uzbekistan Sum", ["UZBEKISTAN"]),
    ("VEF", Some("937"), 2, "Bs", "Bolivar Fuerte", ["VENEZUELA, BOLIVARIAN REPUBLIC OF"]),
    ("VND", Some("704"), 0, "₫", "Dong", ["VIET NAM"]),
    ("VUV", Some("548"), 0, "", "Vatu", ["VANUATU"]),
    ("WST", Some("882"), 2, "", "Tala", ["SAMOA"]),
    ("XAF", Some("950"), 0, "", "CFA Franc BEAC", ["CAMEROON", "CENTRAL AFRICAN REPUBLIC", "CHAD", "CONGO", "EQUATORIAL GUINEA", "GABON"]),
    ("XAG", Some("961"), 0, "", "Silver", ["ZZ11_Silver"]),
    ("XAU", Some("959"), 0, "", "Gold", ["ZZ08_Gold"]),
    ("XBA", Some("955"), 0, "", "Bond Markets Unit European Composite Unit (EURCO)", ["ZZ01_Bond Markets Unit European_EURCO"]),
    ("XBB", Some("956"), 0, "", "Bond Markets Unit European Monetary Unit (E.M.U.-6)", ["ZZ02_Bond Markets Unit European_EMU-6"]),
    ("XBC", Some("957"), 0, "", "Bond Markets Unit European Unit of Account 9 (E.U.A.-9)", ["ZZ03_Bond Markets Unit European_EUA-9"]),
    ("XBD", Some("958"), 0, "", "Bond Markets Unit European Unit of Account 17 (E.U.A.-17)", ["ZZ04_Bond Markets Unit European_EUA-17"]),
    ("XCD", Some("951"), 2, "$", "East Caribbean Dollar", ["ANGUILLA", "ANTIGUA AND BARBUDA", "DOMINICA", "GRENADA", "MONTSERRAT", "SAINT KITTS AND NEVIS", "SAINT LUCIA", "SAINT VINCENT AND THE GRENADINES"]),
    ("XDR", Some("960"), 0, "", "SDR (Special Drawing Right)", ["INTERNATIONAL MONETARY FUND (IMF) "]),
    ("XFU", None, 0, "", "UIC-Franc", ["ZZ05_UIC-Franc"]),
    ("XOF", Some("952"), 0, "", "CFA Franc BCEAO", ["BENIN", "BURKINA FASO", "CÔTE D'IVOIRE", "GUINEA-BISSAU", "MALI", "NIGER", "SENEGAL", "TOGO"]),
    ("XPD", Some("964"), 0, "", "Palladium", ["ZZ09_Palladium"]),
    ("XPF", Some("953"), 0, "", "CFP Franc", ["FRENCH POLYNESIA", "NEW CALEDONIA", "WALLIS AND FUTUNA"]),
    ("XPT", Some("962"), 0, "", "Platinum", ["ZZ10_Platinum"]),
    ("XSU", Some("994"), 0, "", "Sucre", ["SISTEMA UNITARIO DE COMPENSACION REGIONAL DE PAGOS \"SUCRE\" "]),
    ("XTS", Some("963"), 0, "", "Codes specifically reserved for testing purposes", ["ZZ06_Testing_Code"]),
    ("XUA", Some("965"), 0, "", "ADB Unit of Account", ["MEMBER COUNTRIES OF THE AFRICAN DEVELOPMENT BANK GROUP"]),
    ("XXX", Some("999"), 0, "", "The codes assigned for transactions where no currency is involved", ["ZZ07_No_Currency"]),
    ("YER", Some("886"), 2, "﷼", "Yemeni Rial", ["YEMEN"]),
    ("ZAR", Some("710"), 2, "R", "Rand", ["LESOTHO", "NAMIBIA", "SOUTH AFRICA"]),
    ("ZMK", Some("894"), 2, "", "Zambian Kwacha", ["ZAMBIA"]),
    ("ZWL", Some("932"), 2, "", "Zimbabwe Dollar", ["ZIMBABWE"]),
}
