//! Single-byte code page tables.
//!
//! Each entry lists the upper half of the page. Undefined positions hold NUL,
//! which never matches because characters below 128 bypass the table.

use super::CodePageDefinition;

pub(super) static DEFINITIONS: &[(&str, CodePageDefinition)] = &[
    (
        "cp437",
        CodePageDefinition {
            name: "USA, Standard Europe",
            languages: &["en"],
            offset: 128,
            chars: "ÇüéâäàåçêëèïîìÄÅ\
             ÉæÆôöòûùÿÖÜ¢£¥₧ƒ\
             áíóúñÑªº¿⌐¬½¼¡«»\
             ░▒▓│┤╡╢╖╕╣║╗╝╜╛┐\
             └┴┬├─┼╞╟╚╔╩╦╠═╬╧\
             ╨╤╥╙╘╒╓╫╪┘┌█▄▌▐▀\
             αßΓπΣσµτΦΘΩδ∞φε∩\
             ≡±≥≤⌠⌡÷≈°∙·√ⁿ²■\u{00A0}",
        },
    ),
    (
        "cp720",
        CodePageDefinition {
            name: "Arabic",
            languages: &["ar"],
            offset: 128,
            chars: "\u{0080}\u{0081}éâ\u{0084}à\u{0086}çêëèïî\u{008D}\u{008E}\u{008F}\
             \u{0090}\u{0651}\u{0652}ô¤ـûùءآأؤ£إئا\
             بةتثجحخدذرزسشص«»\
             ░▒▓│┤╡╢╖╕╣║╗╝╜╛┐\
             └┴┬├─┼╞╟╚╔╩╦╠═╬╧\
             ╨╤╥╙╘╒╓╫╪┘┌█▄▌▐▀\
             ضطظعغفµقكلمنهوىي\
             ≡\u{064B}\u{064C}\u{064D}\u{064E}\u{064F}\u{0650}≈°∙·√ⁿ²■\u{00A0}",
        },
    ),
    (
        "cp737",
        CodePageDefinition {
            name: "Greek",
            languages: &["el"],
            offset: 128,
            chars: "ΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟΠ\
             ΡΣΤΥΦΧΨΩαβγδεζηθ\
             ικλμνξοπρσςτυφχψ\
             ░▒▓│┤╡╢╖╕╣║╗╝╜╛┐\
             └┴┬├─┼╞╟╚╔╩╦╠═╬╧\
             ╨╤╥╙╘╒╓╫╪┘┌█▄▌▐▀\
             ωάέήϊίόύϋώΆΈΉΊΌΎ\
             Ώ±≥≤ΪΫ÷≈°∙·√ⁿ²■\u{00A0}",
        },
    ),
    (
        "cp775",
        CodePageDefinition {
            name: "Baltic Rim",
            languages: &["et", "lt"],
            offset: 128,
            chars: "ĆüéāäģåćłēŖŗīŹÄÅ\
             ÉæÆōöĢ¢ŚśÖÜø£Ø×¤\
             ĀĪóŻżź”¦©®¬½¼Ł«»\
             ░▒▓│┤ĄČĘĖ╣║╗╝ĮŠ┐\
             └┴┬├─┼ŲŪ╚╔╩╦╠═╬Ž\
             ąčęėįšųūž┘┌█▄▌▐▀\
             ÓßŌŃõÕµńĶķĻļņĒŅ’\
             \u{00AD}±“¾¶§÷„°∙·¹³²■\u{00A0}",
        },
    ),
    (
        "cp850",
        CodePageDefinition {
            name: "Multilingual",
            languages: &["en"],
            offset: 128,
            chars: "ÇüéâäàåçêëèïîìÄÅ\
             ÉæÆôöòûùÿÖÜø£Ø×ƒ\
             áíóúñÑªº¿®¬½¼¡«»\
             ░▒▓│┤ÁÂÀ©╣║╗╝¢¥┐\
             └┴┬├─┼ãÃ╚╔╩╦╠═╬¤\
             ðÐÊËÈıÍÎÏ┘┌█▄¦Ì▀\
             ÓßÔÒõÕµþÞÚÛÙýÝ¯´\
             \u{00AD}±‗¾¶§÷¸°¨·¹³²■\u{00A0}",
        },
    ),
    (
        "cp851",
        CodePageDefinition {
            name: "Greek",
            languages: &["el"],
            offset: 128,
            chars: "ÇüéâäàΆçêëèïîΈÄΉ\
             Ί\u{0020}ΌôöΎûùΏÖÜά£έήί\
             ϊΐόύΑΒΓΔΕΖΗ½ΘΙ«»\
             ░▒▓│┤ΚΛΜΝ╣║╗╝ΞΟ┐\
             └┴┬├─┼ΠΡ╚╔╩╦╠═╬Σ\
             ΤΥΦΧΨΩαβγ┘┌█▄δε▀\
             ζηθικλμνξοπρσςτ´\
             \u{00AD}±υφχ§ψ΅°¨ωϋΰώ■\u{0020}",
        },
    ),
    (
        "cp852",
        CodePageDefinition {
            name: "Latin 2",
            languages: &["hu", "pl", "cz"],
            offset: 128,
            chars: "ÇüéâäůćçłëŐőîŹÄĆ\
             ÉĹĺôöĽľŚśÖÜŤťŁ×č\
             áíóúĄąŽžĘę¬źČş«»\
             ░▒▓│┤ÁÂĚŞ╣║╗╝Żż┐\
             └┴┬├─┼Ăă╚╔╩╦╠═╬¤\
             đĐĎËďŇÍÎě┘┌█▄ŢŮ▀\
             ÓßÔŃńňŠšŔÚŕŰýÝţ´\
             \u{00AD}˝˛ˇ˘§÷¸°¨˙űŘř■\u{00A0}",
        },
    ),
    (
        "cp855",
        CodePageDefinition {
            name: "Cyrillic",
            languages: &["bg"],
            offset: 128,
            chars: "ђЂѓЃёЁєЄѕЅіІїЇјЈ\
             љЉњЊћЋќЌўЎџЏюЮъЪ\
             аАбБцЦдДеЕфФгГ«»\
             ░▒▓│┤хХиИ╣║╗╝йЙ┐\
             └┴┬├─┼кК╚╔╩╦╠═╬¤\
             лЛмМнНоОп┘┌█▄Пя▀\
             ЯрРсСтТуУжЖвВьЬ№\
             \u{00AD}ыЫзЗшШэЭщЩчЧ§■\u{00A0}",
        },
    ),
    (
        "cp857",
        CodePageDefinition {
            name: "Turkish",
            languages: &["tr"],
            offset: 128,
            chars: "ÇüéâäàåçêëèïîıÄÅ\
             ÉæÆôöòûùİÖÜø£ØŞş\
             áíóúñÑĞğ¿®¬½¼¡«»\
             ░▒▓│┤ÁÂÀ©╣║╗╝¢¥┐\
             └┴┬├─┼ãÃ╚╔╩╦╠═╬¤\
             ºªÊËÈ\0ÍÎÏ┘┌█▄¦Ì▀\
             ÓßÔÒõÕµ\0×ÚÛÙìÿ¯´\
             \u{00AD}±\0¾¶§÷¸°¨·¹³²■\u{00A0}",
        },
    ),
    (
        "cp858",
        CodePageDefinition {
            name: "Euro",
            languages: &["en"],
            offset: 128,
            chars: "ÇüéâäàåçêëèïîìÄÅ\
             ÉæÆôöòûùÿÖÜø£Ø×ƒ\
             áíóúñÑªº¿®¬½¼¡«»\
             ░▒▓│┤ÁÂÀ©╣║╗╝¢¥┐\
             └┴┬├─┼ãÃ╚╔╩╦╠═╬¤\
             ðÐÊËÈ€ÍÎÏ┘┌█▄¦Ì▀\
             ÓßÔÒõÕµþÞÚÛÙýÝ¯´\
             \u{00AD}±‗¾¶§÷¸°¨·¹³²■\u{00A0}",
        },
    ),
    (
        "cp860",
        CodePageDefinition {
            name: "Portuguese",
            languages: &["pt"],
            offset: 128,
            chars: "ÇüéâãàÁçêÊèÍÔìÃÂ\
             ÉÀÈôõòÚùÌÕÜ¢£Ù₧Ó\
             áíóúñÑªº¿Ò¬½¼¡«»\
             ░▒▓│┤╡╢╖╕╣║╗╝╜╛┐\
             └┴┬├─┼╞╟╚╔╩╦╠═╬╧\
             ╨╤╥╙╘╒╓╫╪┘┌█▄▌▐▀\
             αßΓπΣσµτΦΘΩδ∞φε∩\
             ≡±≥≤⌠⌡÷≈°∙·√ⁿ²■\u{00A0}",
        },
    ),
    (
        "cp861",
        CodePageDefinition {
            name: "Icelandic",
            languages: &["is"],
            offset: 128,
            chars: "ÇüéâäàåçêëèÐðÞÄÅ\
             ÉæÆôöþûÝýÖÜø£Ø₧ƒ\
             áíóúÁÍÓÚ¿⌐¬½¼¡«»\
             ░▒▓│┤╡╢╖╕╣║╗╝╜╛┐\
             └┴┬├─┼╞╟╚╔╩╦╠═╬╧\
             ╨╤╥╙╘╒╓╫╪┘┌█▄▌▐▀\
             αßΓπΣσµτΦΘΩδ∞φε∩\
             ≡±≥≤⌠⌡÷≈°∙·√ⁿ²■\u{00A0}",
        },
    ),
    (
        "cp862",
        CodePageDefinition {
            name: "Hebrew",
            languages: &["he"],
            offset: 128,
            chars: "אבגדהוזחטיךכלםמן\
             נסעףפץצקרשת¢£¥₧ƒ\
             áíóúñÑªº¿⌐¬½¼¡«»\
             ░▒▓│┤╡╢╖╕╣║╗╝╜╛┐\
             └┴┬├─┼╞╟╚╔╩╦╠═╬╧\
             ╨╤╥╙╘╒╓╫╪┘┌█▄▌▐▀\
             αßΓπΣσµτΦΘΩδ∞φε∩\
             ≡±≥≤⌠⌡÷≈°∙·√ⁿ²■\u{00A0}",
        },
    ),
    (
        "cp863",
        CodePageDefinition {
            name: "Canadian French",
            languages: &["fr"],
            offset: 128,
            chars: "ÇüéâÂà¶çêëèïî‗À§\
             ÉÈÊôËÏûù¤ÔÜ¢£ÙÛƒ\
             ¦´óú¨¸³¯Î⌐¬½¼¾«»\
             ░▒▓│┤╡╢╖╕╣║╗╝╜╛┐\
             └┴┬├─┼╞╟╚╔╩╦╠═╬╧\
             ╨╤╥╙╘╒╓╫╪┘┌█▄▌▐▀\
             αßΓπΣσµτΦΘΩδ∞φε∩\
             ≡±≥≤⌠⌡÷≈°∙·√ⁿ²■\u{00A0}",
        },
    ),
    (
        "cp864",
        CodePageDefinition {
            name: "Arabic",
            languages: &["ar"],
            offset: 128,
            chars: "°·∙√▒─│┼┤┬├┴┐┌└┘\
             β∞φ±½¼≈«»ﻷﻸ\0\0ﻻﻼ\0\
             \u{00A0}\u{00AD}ﺂ£¤ﺄ\0\0ﺎﺏﺕﺙ،ﺝﺡﺥ\
             ٠١٢٣٤٥٦٧٨٩ﻑ؛ﺱﺵﺹ؟\
             ¢ﺀﺁﺃﺅﻊﺋﺍﺑﺓﺗﺛﺟﺣﺧﺩ\
             ﺫﺭﺯﺳﺷﺻﺿﻁﻅﻋﻏ¦¬÷×ﻉ\
             ـﻓﻗﻛﻟﻣﻧﻫﻭﻯﻳﺽﻌﻎﻍﻡ\
             ﹽ\u{0651}ﻥﻩﻬﻰﻲﻐﻕﻵﻶﻝﻙﻱ■\0",
        },
    ),
    (
        "cp865",
        CodePageDefinition {
            name: "Nordic",
            languages: &["sv", "dk"],
            offset: 128,
            chars: "ÇüéâäàåçêëèïîìÄÅ\
             ÉæÆôöòûùÿÖÜø£Ø₧ƒ\
             áíóúñÑªº¿⌐¬½¼¡«¤\
             ░▒▓│┤╡╢╖╕╣║╗╝╜╛┐\
             └┴┬├─┼╞╟╚╔╩╦╠═╬╧\
             ╨╤╥╙╘╒╓╫╪┘┌█▄▌▐▀\
             αßΓπΣσµτΦΘΩδ∞φε∩\
             ≡±≥≤⌠⌡÷≈°∙·√ⁿ²■\u{00A0}",
        },
    ),
    (
        "cp866",
        CodePageDefinition {
            name: "Cyrillic 2",
            languages: &["ru"],
            offset: 128,
            chars: "АБВГДЕЖЗИЙКЛМНОП\
             РСТУФХЦЧШЩЪЫЬЭЮЯ\
             абвгдежзийклмноп\
             ░▒▓│┤╡╢╖╕╣║╗╝╜╛┐\
             └┴┬├─┼╞╟╚╔╩╦╠═╬╧\
             ╨╤╥╙╘╒╓╫╪┘┌█▄▌▐▀\
             рстуфхцчшщъыьэюя\
             ЁёЄєЇїЎў°∙·√№¤■\u{00A0}",
        },
    ),
    (
        "cp869",
        CodePageDefinition {
            name: "Greek",
            languages: &["el"],
            offset: 128,
            chars: "\0\0\0\0\0\0Ά\0·¬¦‘’Έ―Ή\
             ΊΪΌ\0\0ΎΫ©Ώ²³ά£έήί\
             ϊΐόύΑΒΓΔΕΖΗ½ΘΙ«»\
             ░▒▓│┤ΚΛΜΝ╣║╗╝ΞΟ┐\
             └┴┬├─┼ΠΡ╚╔╩╦╠═╬Σ\
             ΤΥΦΧΨΩαβγ┘┌█▄δε▀\
             ζηθικλμνξοπρσςτ΄\
             \u{00AD}±υφχ§ψ΅°¨ωϋΰώ■\u{00A0}",
        },
    ),
    (
        "cp874",
        CodePageDefinition {
            name: "Thai",
            languages: &["th"],
            offset: 128,
            chars: "€\0\0\0\0…\0\0\0\0\0\0\0\0\0\0\
             \0‘’“”•–—\0\0\0\0\0\0\0\0\
             \u{00A0}กขฃคฅฆงจฉชซฌญฎฏ\
             ฐฑฒณดตถทธนบปผฝพฟ\
             ภมยรฤลฦวศษสหฬอฮฯ\
             ะ\u{0E31}าำ\u{0E34}\u{0E35}\u{0E36}\u{0E37}\u{0E38}\u{0E39}\u{0E3A}\0\0\0\0฿\
             เแโใไๅๆ\u{0E47}\u{0E48}\u{0E49}\u{0E4A}\u{0E4B}\u{0E4C}\u{0E4D}\u{0E4E}๏\
             ๐๑๒๓๔๕๖๗๘๙๚๛\0\0\0\0",
        },
    ),
    (
        "cp1125",
        CodePageDefinition {
            name: "Ukrainian",
            languages: &["uk"],
            offset: 128,
            chars: "АБВГДЕЖЗИЙКЛМНОП\
             РСТУФХЦЧШЩЪЫЬЭЮЯ\
             абвгдежзийклмноп\
             ░▒▓│┤╡╢╖╕╣║╗╝╜╛┐\
             └┴┬├─┼╞╟╚╔╩╦╠═╬╧\
             ╨╤╥╙╘╒╓╫╪┘┌█▄▌▐▀\
             рстуфхцчшщъыьэюя\
             ЁёҐґЄєІіЇї·√№¤■\u{00A0}",
        },
    ),
    (
        "iso88591",
        CodePageDefinition {
            name: "Latin 1",
            languages: &["en"],
            offset: 160,
            chars: "\u{00A0}¡¢£¤¥¦§¨©ª«¬\u{00AD}®¯\
             °±²³´µ¶·¸¹º»¼½¾¿\
             ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏ\
             ÐÑÒÓÔÕÖ×ØÙÚÛÜÝÞß\
             àáâãäåæçèéêëìíîï\
             ðñòóôõö÷øùúûüýþÿ",
        },
    ),
    (
        "iso88592",
        CodePageDefinition {
            name: "Latin 2",
            languages: &["hu", "pl", "cz"],
            offset: 160,
            chars: "\u{00A0}Ą˘Ł¤ĽŚ§¨ŠŞŤŹ\u{00AD}ŽŻ\
             °ą˛ł´ľśˇ¸šşťź˝žż\
             ŔÁÂĂÄĹĆÇČÉĘËĚÍÎĎ\
             ĐŃŇÓÔŐÖ×ŘŮÚŰÜÝŢß\
             ŕáâăäĺćçčéęëěíîď\
             đńňóôőö÷řůúűüýţ˙",
        },
    ),
    (
        "iso88597",
        CodePageDefinition {
            name: "Greek",
            languages: &["el"],
            offset: 160,
            chars: "\u{00A0}‘’£€₯¦§¨©ͺ«¬\u{00AD}\0―\
             °±²³΄΅Ά·ΈΉΊ»Ό½ΎΏ\
             ΐΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟ\
             ΠΡ\0ΣΤΥΦΧΨΩΪΫάέήί\
             ΰαβγδεζηθικλμνξο\
             πρςστυφχψωϊϋόύώ\0",
        },
    ),
    (
        "iso885915",
        CodePageDefinition {
            name: "Latin 9",
            languages: &["fr"],
            offset: 160,
            chars: "\u{00A0}¡¢£€¥Š§š©ª«¬\u{00AD}®¯\
             °±²³Žµ¶·ž¹º»ŒœŸ¿\
             ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏ\
             ÐÑÒÓÔÕÖ×ØÙÚÛÜÝÞß\
             àáâãäåæçèéêëìíîï\
             ðñòóôõö÷øùúûüýþÿ",
        },
    ),
    (
        "rk1048",
        CodePageDefinition {
            name: "Kazakh",
            languages: &["kk"],
            offset: 128,
            chars: "ЂЃ‚ѓ„…†‡€‰Љ‹ЊҚҺЏ\
             ђ‘’“”•–—\0™љ›њқһџ\
             \u{00A0}ҰұӘ¤Ө¦§Ё©Ғ«¬\u{00AD}®Ү\
             °±Ііөµ¶·ё№ғ»әҢңү\
             АБВГДЕЖЗИЙКЛМНОП\
             РСТУФХЦЧШЩЪЫЬЭЮЯ\
             абвгдежзийклмноп\
             рстуфхцчшщъыьэюя",
        },
    ),
    (
        "windows1250",
        CodePageDefinition {
            name: "Central Europe",
            languages: &["hu", "pl", "cz"],
            offset: 128,
            chars: "€\0‚\0„…†‡\0‰Š‹ŚŤŽŹ\
             \0‘’“”•–—\0™š›śťžź\
             \u{00A0}ˇ˘Ł¤Ą¦§¨©Ş«¬\u{00AD}®Ż\
             °±˛ł´µ¶·¸ąş»Ľ˝ľż\
             ŔÁÂĂÄĹĆÇČÉĘËĚÍÎĎ\
             ĐŃŇÓÔŐÖ×ŘŮÚŰÜÝŢß\
             ŕáâăäĺćçčéęëěíîď\
             đńňóôőö÷řůúűüýţ˙",
        },
    ),
    (
        "windows1251",
        CodePageDefinition {
            name: "Cyrillic",
            languages: &["ru", "bg"],
            offset: 128,
            chars: "ЂЃ‚ѓ„…†‡€‰Љ‹ЊЌЋЏ\
             ђ‘’“”•–—\0™љ›њќћџ\
             \u{00A0}ЎўЈ¤Ґ¦§Ё©Є«¬\u{00AD}®Ї\
             °±Ііґµ¶·ё№є»јЅѕї\
             АБВГДЕЖЗИЙКЛМНОП\
             РСТУФХЦЧШЩЪЫЬЭЮЯ\
             абвгдежзийклмноп\
             рстуфхцчшщъыьэюя",
        },
    ),
    (
        "windows1252",
        CodePageDefinition {
            name: "Latin I",
            languages: &["en", "fr", "de"],
            offset: 128,
            chars: "€\0‚ƒ„…†‡ˆ‰Š‹Œ\0Ž\0\
             \0‘’“”•–—˜™š›œ\0žŸ\
             \u{00A0}¡¢£¤¥¦§¨©ª«¬\u{00AD}®¯\
             °±²³´µ¶·¸¹º»¼½¾¿\
             ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏ\
             ÐÑÒÓÔÕÖ×ØÙÚÛÜÝÞß\
             àáâãäåæçèéêëìíîï\
             ðñòóôõö÷øùúûüýþÿ",
        },
    ),
    (
        "windows1253",
        CodePageDefinition {
            name: "Greek",
            languages: &["el"],
            offset: 128,
            chars: "€\0‚ƒ„…†‡\0‰\0‹\0\0\0\0\
             \0‘’“”•–—\0™\0›\0\0\0\0\
             \u{00A0}΅Ά£¤¥¦§¨©\0«¬\u{00AD}®―\
             °±²³΄µ¶·ΈΉΊ»Ό½ΎΏ\
             ΐΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟ\
             ΠΡ\0ΣΤΥΦΧΨΩΪΫάέήί\
             ΰαβγδεζηθικλμνξο\
             πρςστυφχψωϊϋόύώ\0",
        },
    ),
    (
        "windows1254",
        CodePageDefinition {
            name: "Turkish",
            languages: &["tr"],
            offset: 128,
            chars: "€\0‚ƒ„…†‡ˆ‰Š‹Œ\0\0\0\
             \0‘’“”•–—˜™š›œ\0\0Ÿ\
             \u{00A0}¡¢£¤¥¦§¨©ª«¬\u{00AD}®¯\
             °±²³´µ¶·¸¹º»¼½¾¿\
             ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏ\
             ĞÑÒÓÔÕÖ×ØÙÚÛÜİŞß\
             àáâãäåæçèéêëìíîï\
             ğñòóôõö÷øùúûüışÿ",
        },
    ),
    (
        "windows1255",
        CodePageDefinition {
            name: "Hebrew",
            languages: &["he"],
            offset: 128,
            chars: "€\0‚ƒ„…†‡ˆ‰\0‹\0\0\0\0\
             \0‘’“”•–—˜™\0›\0\0\0\0\
             \u{00A0}¡¢£₪¥¦§¨©×«¬\u{00AD}®¯\
             °±²³´µ¶·¸¹÷»¼½¾¿\
             \u{05B0}\u{05B1}\u{05B2}\u{05B3}\u{05B4}\u{05B5}\u{05B6}\u{05B7}\u{05B8}\u{05B9}\0\u{05BB}\u{05BC}\u{05BD}־\u{05BF}\
             ׀\u{05C1}\u{05C2}׃װױײ׳״\0\0\0\0\0\0\0\
             אבגדהוזחטיךכלםמן\
             נסעףפץצקרשת\0\0\u{200E}\u{200F}\0",
        },
    ),
    (
        "windows1256",
        CodePageDefinition {
            name: "Arabic",
            languages: &["ar"],
            offset: 128,
            chars: "€پ‚ƒ„…†‡ˆ‰ٹ‹Œچژڈ\
             گ‘’“”•–—ک™ڑ›œ\u{200C}\u{200D}ں\
             \u{00A0}،¢£¤¥¦§¨©ھ«¬\u{00AD}®¯\
             °±²³´µ¶·¸¹؛»¼½¾؟\
             ہءآأؤإئابةتثجحخد\
             ذرزسشصض×طظعغـفقك\
             àلâمنهوçèéêëىيîï\
             \u{064B}\u{064C}\u{064D}\u{064E}ô\u{064F}\u{0650}÷\u{0651}ù\u{0652}ûü\u{200E}\u{200F}ے",
        },
    ),
    (
        "windows1257",
        CodePageDefinition {
            name: "Baltic Rim",
            languages: &["et", "lt", "lv"],
            offset: 128,
            chars: "€\0‚\0„…†‡\0‰\0‹\0¨ˇ¸\
             \0‘’“”•–—\0™\0›\0¯˛\0\
             \u{00A0}\0¢£¤\0¦§Ø©Ŗ«¬\u{00AD}®Æ\
             °±²³´µ¶·ø¹ŗ»¼½¾æ\
             ĄĮĀĆÄÅĘĒČÉŹĖĢĶĪĻ\
             ŠŃŅÓŌÕÖ×ŲŁŚŪÜŻŽß\
             ąįāćäåęēčéźėģķīļ\
             šńņóōõö÷ųłśūüżž˙",
        },
    ),
    (
        "windows1258",
        CodePageDefinition {
            name: "Vietnamese",
            languages: &["vi"],
            offset: 128,
            chars: "€\0‚ƒ„…†‡ˆ‰\0‹Œ\0\0\0\
             \0‘’“”•–—˜™\0›œ\0\0Ÿ\
             \u{00A0}¡¢£¤¥¦§¨©ª«¬\u{00AD}®¯\
             °±²³´µ¶·¸¹º»¼½¾¿\
             ÀÁÂĂÄÅÆÇÈÉÊË\u{0300}ÍÎÏ\
             ĐÑ\u{0309}ÓÔƠÖ×ØÙÚÛÜƯ\u{0303}ß\
             àáâăäåæçèéêë\u{0301}íîï\
             đñ\u{0323}óôơö÷øùúûüư₫ÿ",
        },
    ),
];
