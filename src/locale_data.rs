//! Per-language redirect markers and the locale property files shipped with the binary.
//!
//! Entries are opaque literals in declaration order. A few rows repeat a marker verbatim;
//! duplicates are dropped when the markers are assembled, not here.

/// `(language code, '|'-separated redirect markers)`, first entry is the preferred local term.
pub static REDIRECT_TABLE: &[(&str, &str)] = &[
    ("af", "#AANSTUUR|#REDIRECT"),
    ("ar", "#تحويل|#REDIRECT"),
    ("arz", "#تحويل|#تحويل|#REDIRECT"),
    ("be-tarask", "#перанакіраваньне|#REDIRECT"),
    ("bg", "#пренасочване|#виж|#REDIRECT"),
    ("br", "#ADKAS|#REDIRECT"),
    ("bs", "#PREUSMJERI|#REDIRECT"),
    ("cs", "#REDIRECT|#PŘESMĚRUJ"),
    ("cu", "#ПРѢНАПРАВЛЄНИѤ|#REDIRECT"),
    ("cy", "#ail-cyfeirio|#ailgyfeirio|#REDIRECT"),
    ("de", "#WEITERLEITUNG|#REDIRECT"),
    ("el", "#ΑΝΑΚΑΤΕΥΘΥΝΣΗ|#REDIRECT"),
    ("en", "#REDIRECT"),
    ("eo", "#ALIDIREKTU|#REDIRECT"),
    ("es", "#REDIRECCIÓN|#REDIRECT"),
    ("et", "#suuna|#REDIRECT"),
    ("eu", "#BIRZUZENDU|#REDIRECT"),
    ("fa", "#تغییرمسیر|#REDIRECT"),
    ("fi", "#OHJAUS|#UUDELLEENOHJAUS|#REDIRECT"),
    ("fr", "#REDIRECTION|#REDIRECT"),
    ("ga", "#redirect|#athsheoladh"),
    ("gl", "#REDIRECCIÓN|#REDIRECT"),
    ("he", "#הפניה|#REDIRECT"),
    ("hr", "#PREUSMJERI|#REDIRECT"),
    ("hu", "#ÁTIRÁNYÍTÁS|#REDIRECT"),
    ("hy", "#REDIRECT|#ՎԵՐԱՀՂՈՒՄ"),
    ("id", "#ALIH|#REDIRECT"),
    ("is", "#tilvísun|#TILVÍSUN|#REDIRECT"),
    ("ja", "#転送|#リダイレクト|＃転送|＃リダイレクト|#REDIRECT"),
    ("ka", "#REDIRECT|#გადამისამართება"),
    ("kk-arab", "#REDIRECT|#ايداۋ"),
    ("kk-cyrl", "#REDIRECT|#АЙДАУ"),
    ("kk-latn", "#REDIRECT|#AÝDAW"),
    ("km", "#បញ្ជូនបន្ត|#ប្ដូរទីតាំងទៅ #ប្តូរទីតាំងទៅ|#ប្ដូរទីតាំង|#ប្តូរទីតាំង|#ប្ដូរចំណងជើង|#REDIRECT"),
    ("ko", "#넘겨주기|#REDIRECT"),
    ("ksh", "#ÖMLEIDUNG|#REDIRECT"),
    ("lt", "#PERADRESAVIMAS|#REDIRECT"),
    ("mk", "#пренасочување|#види|#Пренасочување|#ПРЕНАСОЧУВАЊЕ|#REDIRECT"),
    ("ml", "#REDIRECT|#തിരിച്ചുവിടുക|തിരിച്ചുവിടല്‍"),
    ("mr", "#पुनर्निर्देशन|#REDIRECT"),
    ("mt", "#RINDIRIZZA|#REDIRECT"),
    ("mwl", "#ANCAMINAR|#REDIRECT"),
    ("nds", "#redirect|#wiederleiden"),
    ("nds-nl", "#DEURVERWIEZING|#DOORVERWIJZING|#REDIRECT"),
    ("nl", "#DOORVERWIJZING|#REDIRECT"),
    ("nn", "#omdiriger|#REDIRECT"),
    ("oc", "#REDIRECCION|#REDIRECT"),
    ("pl", "#PATRZ|#PRZEKIERUJ|#TAM|#REDIRECT"),
    ("pt", "#REDIRECIONAMENTO|#REDIRECT"),
    ("ro", "#REDIRECTEAZA|#REDIRECT"),
    ("ru", "#перенаправление|#перенапр|#REDIRECT"),
    ("sa", "#पुनर्निदेशन|#REDIRECT"),
    ("sd", "#چوريو|#REDIRECT"),
    ("si", "#යළියොමුව|#REDIRECT"),
    ("sk", "#presmeruj|#REDIRECT"),
    ("sq", "#RIDREJTO|#REDIRECT"),
    ("srn", "#STIR|#DOORVERWIJZING|#REDIRECT"),
    ("sr-ec", "#Преусмери|#redirect|#преусмери|#ПРЕУСМЕРИ"),
    ("sr-el", "#Preusmeri|#redirect|#preusmeri|#PREUSMERI"),
    ("sv", "#OMDIRIGERING|#REDIRECT"),
    ("ta", "#வழிமாற்று|#REDIRECT"),
    ("te", "#దారిమార్పు|#REDIRECT"),
    ("th", "#เปลี่ยนทาง|#REDIRECT"),
    ("tr", "#YÖNLENDİRME|#REDIRECT"),
    ("tt-latn", "#yünältü|#REDIRECT"),
    ("uk", "#ПЕРЕНАПРАВЛЕННЯ|#ПЕРЕНАПР|#перенаправление|#перенапр|#REDIRECT"),
    ("vi", "#đổi|#đổi|#REDIRECT"),
    ("vro", "#saadaq|#suuna|#REDIRECT"),
    ("yi", "#ווייטערפירן|#הפניה|#REDIRECT"),
    ("ab", "#перенаправление|#перенапр|#REDIRECT"),
    ("ace", "#ALIH|#REDIRECT"),
    ("aln", "#RIDREJTO|#REDIRECT"),
    ("als", "#WEITERLEITUNG|#REDIRECT"),
    ("an", "#REDIRECCIÓN|#REDIRECT"),
    ("arn", "#REDIRECCIÓN|#REDIRECT"),
    ("av", "#перенаправление|#перенапр|#REDIRECT"),
    ("ay", "#REDIRECCIÓN|#REDIRECT"),
    ("ba", "#перенаправление|#перенапр|#REDIRECT"),
    ("bar", "#WEITERLEITUNG|#REDIRECT"),
    ("bat-smg", "#PERADRESAVIMAS|#REDIRECT"),
    ("bcc", "#تغییرمسیر|#REDIRECT"),
    ("be-x-old", "#перанакіраваньне|#REDIRECT"),
    ("bm", "#REDIRECTION|#REDIRECT"),
    ("bqi", "#تغییرمسیر|#REDIRECT"),
    ("bug", "#ALIH|#REDIRECT"),
    ("cbk-zam", "#REDIRECCIÓN|#REDIRECT"),
    ("ce", "#перенаправление|#перенапр|#REDIRECT"),
    ("crh-cyrl", "#перенаправление|#перенапр|#REDIRECT"),
    ("cv", "#перенаправление|#перенапр|#REDIRECT"),
    ("de-at", "#WEITERLEITUNG|#REDIRECT"),
    ("de-ch", "#WEITERLEITUNG|#REDIRECT"),
    ("de-formal", "#WEITERLEITUNG|#REDIRECT"),
    ("dsb", "#WEITERLEITUNG|#REDIRECT"),
    ("ff", "#REDIRECTION|#REDIRECT"),
    ("fiu-vro", "#saadaq|#suuna|#REDIRECT"),
    ("frp", "#REDIRECTION|#REDIRECT"),
    ("gag", "#YÖNLENDİRME|#REDIRECT"),
    ("glk", "#تغییرمسیر|#REDIRECT"),
    ("gn", "#REDIRECCIÓN|#REDIRECT"),
    ("gsw", "#WEITERLEITUNG|#REDIRECT"),
    ("hsb", "#WEITERLEITUNG|#REDIRECT"),
    ("ht", "#REDIRECTION|#REDIRECT"),
    ("inh", "#перенаправление|#перенапр|#REDIRECT"),
    ("jv", "#ALIH|#REDIRECT"),
    ("kaa", "#REDIRECT|#AÝDAW"),
    ("kk", "#REDIRECT|#АЙДАУ"),
    ("kk-cn", "#REDIRECT|#ايداۋ"),
    ("kk-kz", "#REDIRECT|#АЙДАУ"),
    ("kk-tr", "#REDIRECT|#AÝDAW"),
    ("kv", "#перенаправление|#перенапр|#REDIRECT"),
    ("lad", "#REDIRECCIÓN|#REDIRECT"),
    ("lb", "#WEITERLEITUNG|#REDIRECT"),
    ("lbe", "#перенаправление|#перенапр|#REDIRECT"),
    ("li", "#DOORVERWIJZING|#REDIRECT"),
    ("ln", "#REDIRECTION|#REDIRECT"),
    ("map-bms", "#ALIH|#REDIRECT"),
    ("mg", "#REDIRECTION|#REDIRECT"),
    ("mhr", "#перенаправление|#перенапр|#REDIRECT"),
    ("mo", "#REDIRECTEAZA|#REDIRECT"),
    ("myv", "#перенаправление|#перенапр|#REDIRECT"),
    ("mzn", "#تغییرمسیر|#REDIRECT"),
    ("nah", "#REDIRECCIÓN|#REDIRECT"),
    ("os", "#перенаправление|#перенапр|#REDIRECT"),
    ("pdc", "#WEITERLEITUNG|#REDIRECT"),
    ("qu", "#REDIRECCIÓN|#REDIRECT"),
    ("rmy", "#REDIRECTEAZA|#REDIRECT"),
    ("ruq", "#REDIRECTEAZA|#REDIRECT"),
    ("ruq-cyrl", "#пренасочување|#види|#Пренасочување|#ПРЕНАСОЧУВАЊЕ|#REDIRECT"),
    ("ruq-grek", "#ΑΝΑΚΑΤΕΥΘΥΝΣΗ|#REDIRECT"),
    ("ruq-latn", "#REDIRECTEAZA|#REDIRECT"),
    ("sah", "#перенаправление|#перенапр|#REDIRECT"),
    ("shi", "#تحويل|#REDIRECT"),
    ("simple", "#REDIRECT"),
    ("sr", "#Преусмери|#redirect|#преусмери|#ПРЕУСМЕРИ"),
    ("stq", "#WEITERLEITUNG|#REDIRECT"),
    ("su", "#ALIH|#REDIRECT"),
    ("szl", "#PATRZ|#PRZEKIERUJ|#TAM|#REDIRECT"),
    ("tt", "#yünältü|#REDIRECT"),
    ("tt-cyrl", "#перенаправление|#перенапр|#REDIRECT"),
    ("ty", "#REDIRECTION|#REDIRECT"),
    ("udm", "#перенаправление|#перенапр|#REDIRECT"),
    ("vep", "#suuna|#REDIRECT"),
    ("vls", "#DOORVERWIJZING|#REDIRECT"),
    ("wa", "#REDIRECTION|#REDIRECT"),
    ("wo", "#REDIRECTION|#REDIRECT"),
    ("xmf", "#REDIRECT|#გადამისამართება"),
    ("ydd", "#ווייטערפירן|#הפניה|#REDIRECT"),
    ("zea", "#DOORVERWIJZING|#REDIRECT"),
];

/// `(language code, property file contents)` compiled into the binary.
pub static EMBEDDED_LOCALES: &[(&str, &str)] = &[
    ("de", include_str!("../locales/locale-de.properties")),
    ("en", include_str!("../locales/locale-en.properties")),
    ("es", include_str!("../locales/locale-es.properties")),
    ("fr", include_str!("../locales/locale-fr.properties")),
    ("it", include_str!("../locales/locale-it.properties")),
    ("nl", include_str!("../locales/locale-nl.properties")),
    ("pt", include_str!("../locales/locale-pt.properties")),
    ("simple", include_str!("../locales/locale-simple.properties")),
];
