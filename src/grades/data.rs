//! Built-in grade table data
//!
//! Grades 1 to 6 follow the 2020 elementary school allocation. The last
//! entry holds the remaining jōyō kanji, taught in secondary school, plus
//! the common alternate forms 叱 填 剥 頬.

pub(super) const GRADES: [&str; 7] = [
    concat!(
        "一右雨円王音下火花貝学気九休玉金空月犬見",
        "五口校左三山子四糸字耳七車手十出女小上森",
        "人水正生青夕石赤千川先早草足村大男竹中虫",
        "町天田土二日入年白八百文木本名目立力林六",
    ),
    concat!(
        "引羽雲園遠何科夏家歌画回会海絵外角楽活間",
        "丸岩顔汽記帰弓牛魚京強教近兄形計元言原戸",
        "古午後語工公広交光考行高黄合谷国黒今才細",
        "作算止市矢姉思紙寺自時室社弱首秋週春書少",
        "場色食心新親図数西声星晴切雪船線前組走多",
        "太体台地池知茶昼長鳥朝直通弟店点電刀冬当",
        "東答頭同道読内南肉馬売買麦半番父風分聞米",
        "歩母方北毎妹万明鳴毛門夜野友用曜来里理話",
    ),
    concat!(
        "悪安暗医委意育員院飲運泳駅央横屋温化荷界",
        "開階寒感漢館岸起期客究急級宮球去橋業曲局",
        "銀区苦具君係軽血決研県庫湖向幸港号根祭皿",
        "仕死使始指歯詩次事持式実写者主守取酒受州",
        "拾終習集住重宿所暑助昭消商章勝乗植申身神",
        "真深進世整昔全相送想息速族他打対待代第題",
        "炭短談着注柱丁帳調追定庭笛鉄転都度投豆島",
        "湯登等動童農波配倍箱畑発反坂板皮悲美鼻筆",
        "氷表秒病品負部服福物平返勉放味命面問役薬",
        "由油有遊予羊洋葉陽様落流旅両緑礼列練路和",
    ),
    concat!(
        "愛案以衣位茨印英栄媛塩岡億加果貨課芽賀改",
        "械害街各覚潟完官管関観願岐希季旗器機議求",
        "泣給挙漁共協鏡競極熊訓軍郡群径景芸欠結建",
        "健験固功好香候康佐差菜最埼材崎昨札刷察参",
        "産散残氏司試児治滋辞鹿失借種周祝順初松笑",
        "唱焼照城縄臣信井成省清静席積折節説浅戦選",
        "然争倉巣束側続卒孫帯隊達単置仲沖兆低底的",
        "典伝徒努灯働特徳栃奈梨熱念敗梅博阪飯飛必",
        "票標不夫付府阜富副兵別辺変便包法望牧末満",
        "未民無約勇要養浴利陸良料量輪類令冷例連老",
        "労録",
    ),
    concat!(
        "圧囲移因永営衛易益液演応往桜可仮価河過快",
        "解格確額刊幹慣眼紀基寄規喜技義逆久旧救居",
        "許境均禁句型経潔件険検限現減故個護効厚耕",
        "航鉱構興講告混査再災妻採際在財罪殺雑酸賛",
        "士支史志枝師資飼示似識質舎謝授修述術準序",
        "招証象賞条状常情織職制性政勢精製税責績接",
        "設絶祖素総造像増則測属率損貸態団断築貯張",
        "停提程適統堂銅導得毒独任燃能破犯判版比肥",
        "非費備評貧布婦武復複仏粉編弁保墓報豊防貿",
        "暴脈務夢迷綿輸余容略留領歴",
    ),
    concat!(
        "胃異遺域宇映延沿恩我灰拡革閣割株干巻看簡",
        "危机揮貴疑吸供胸郷勤筋系敬警劇激穴券絹権",
        "憲源厳己呼誤后孝皇紅降鋼刻穀骨困砂座済裁",
        "策冊蚕至私姿視詞誌磁射捨尺若樹収宗就衆従",
        "縦縮熟純処署諸除承将傷障蒸針仁垂推寸盛聖",
        "誠舌宣専泉洗染銭善奏窓創装層操蔵臓存尊退",
        "宅担探誕段暖値宙忠著庁頂腸潮賃痛敵展討党",
        "糖届難乳認納脳派拝背肺俳班晩否批秘俵腹奮",
        "並陛閉片補暮宝訪亡忘棒枚幕密盟模訳郵優預",
        "幼欲翌乱卵覧裏律臨朗論",
    ),
    concat!(
        "亜哀挨曖握扱宛嵐依威為畏尉萎偉椅彙違維慰",
        "緯壱逸芋咽姻淫陰隠韻唄鬱畝浦詠影鋭疫悦越",
        "謁閲炎怨宴援煙猿鉛縁艶汚凹押旺欧殴翁奥憶",
        "臆虞乙俺卸穏佳苛架華菓渦嫁暇禍靴寡箇稼蚊",
        "牙瓦雅餓介戒怪拐悔皆塊楷潰壊懐諧劾崖涯慨",
        "蓋該概骸垣柿核殻郭較隔獲嚇穫岳顎掛括喝渇",
        "葛滑褐轄且釜鎌刈甘汗缶肝冠陥乾勘患貫喚堪",
        "換敢棺款閑勧寛歓監緩憾還環韓艦鑑含玩頑企",
        "伎忌奇祈軌既飢鬼亀幾棋棄毀畿輝騎宜偽欺儀",
        "戯擬犠菊吉喫詰却脚虐及丘朽臼糾嗅窮巨拒拠",
        "虚距御凶叫狂享況峡挟狭恐恭脅矯響驚仰暁凝",
        "巾斤菌琴僅緊錦謹襟吟駆惧愚偶遇隅串屈掘窟",
        "繰勲薫刑茎契恵啓掲渓蛍傾携継詣慶憬稽憩鶏",
        "迎鯨隙撃桁傑肩倹兼剣拳軒圏堅嫌献遣賢謙鍵",
        "繭顕懸幻玄弦舷股虎孤弧枯雇誇鼓錮顧互呉娯",
        "悟碁勾孔巧甲江坑抗攻更拘肯侯恒洪荒郊貢控",
        "梗喉慌硬絞項溝綱酵稿衡購乞拷剛傲豪克酷獄",
        "駒込頃昆恨婚痕紺魂墾懇沙唆詐鎖挫采砕宰栽",
        "彩斎債催塞歳載剤削柵索酢搾錯咲刹拶撮擦桟",
        "惨傘斬暫旨伺刺祉肢施恣脂紫嗣雌摯賜諮侍慈",
        "餌璽軸𠮟疾執湿嫉漆芝赦斜煮遮邪蛇酌釈爵寂",
        "朱狩殊珠腫趣寿呪需儒囚舟秀臭袖羞愁酬醜蹴",
        "襲汁充柔渋銃獣叔淑粛塾俊瞬旬巡盾准殉循潤",
        "遵庶緒如叙徐升召匠床抄肖尚昇沼宵症祥称渉",
        "紹訟掌晶焦硝粧詔奨詳彰憧衝償礁鐘丈冗浄剰",
        "畳壌嬢錠譲醸拭殖飾触嘱辱尻伸芯辛侵津唇娠",
        "振浸紳診寝慎審震薪刃尽迅甚陣尋腎須吹炊帥",
        "粋衰酔遂睡穂随髄枢崇据杉裾瀬是姓征斉牲凄",
        "逝婿誓請醒斥析脊隻惜戚跡籍拙窃摂仙占扇栓",
        "旋煎羨腺詮践箋潜遷薦繊鮮禅漸膳繕狙阻租措",
        "粗疎訴塑遡礎双壮荘捜挿桑掃曹曽爽喪痩葬僧",
        "遭槽踪燥霜騒藻憎贈即促捉俗賊遜汰妥唾堕惰",
        "駄耐怠胎泰堆袋逮替滞戴滝択沢卓拓託濯諾濁",
        "但脱奪棚誰丹旦胆淡嘆端綻鍛弾壇恥致遅痴稚",
        "緻畜逐蓄秩窒嫡抽衷酎鋳駐弔挑彫眺釣貼超跳",
        "徴嘲澄聴懲勅捗沈珍朕陳鎮椎墜塚漬坪爪鶴呈",
        "廷抵邸亭貞帝訂逓偵堤艇締諦泥摘滴溺迭哲徹",
        "撤添塡殿斗吐妬途渡塗賭奴怒到逃倒凍唐桃透",
        "悼盗陶塔搭棟痘筒稲踏謄藤闘騰洞胴瞳峠匿督",
        "篤凸突屯豚頓貪鈍曇丼那謎鍋軟尼弐匂虹尿妊",
        "忍寧捻粘悩濃把覇婆罵杯排廃輩培陪媒賠伯拍",
        "泊迫剝舶薄漠縛爆箸肌鉢髪伐抜罰閥氾帆汎伴",
        "畔般販斑搬煩頒範繁藩蛮盤妃彼披卑疲被扉碑",
        "罷避尾眉微膝肘匹泌姫漂苗描猫浜賓頻敏瓶扶",
        "怖附訃赴浮符普腐敷膚賦譜侮舞封伏幅覆払沸",
        "紛雰噴墳憤丙併柄塀幣弊蔽餅壁璧癖蔑偏遍哺",
        "捕舗募慕簿芳邦奉抱泡胞俸倣峰砲崩蜂飽褒縫",
        "乏忙坊妨房肪某冒剖紡傍帽貌膨謀頰朴睦僕墨",
        "撲没勃堀奔翻凡盆麻摩磨魔昧埋膜枕又抹慢漫",
        "魅岬蜜妙眠矛霧娘冥銘滅免麺茂妄盲耗猛網黙",
        "紋冶弥厄躍闇喩愉諭癒唯幽悠湧猶裕雄誘憂融",
        "与誉妖庸揚揺溶腰瘍踊窯擁謡抑沃翼拉裸羅頼",
        "雷絡酪辣濫藍欄吏痢履璃離慄柳竜粒隆硫侶虜",
        "慮了涼猟陵僚寮療瞭糧厘倫隣瑠涙累塁励戻鈴",
        "零霊隷齢麗暦劣烈裂恋廉錬呂炉賂露弄郎浪廊",
        "楼漏籠麓賄脇惑枠湾腕叱填剥頬",
    ),
];
